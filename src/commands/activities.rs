use crate::api::{redmine::Redmine, Tracker};
use crate::libs::{config::Config, messages::Message, view::View};
use crate::{msg_print, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let redmine = Redmine::new(config.redmine()?)?;
    let activities = redmine.activities().await?;

    if activities.is_empty() {
        msg_warning!(Message::NoActivities);
        return Ok(());
    }

    msg_print!(Message::ActivitiesHeader);
    View::activities(&activities);
    Ok(())
}
