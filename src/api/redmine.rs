//! Redmine REST API client.
//!
//! Uses three endpoints:
//!
//! - `GET /issues/{id}.json` for the issue title and project
//! - `GET /enumerations/time_entry_activities.json` for the activity list
//! - `POST /time_entries.json` to record the entry, answered with `201 Created`
//!
//! Requests authenticate with the `X-Redmine-API-Key` header. The key comes
//! from the config file, the `REDMINE_API_KEY` environment variable, or the
//! encrypted cache, in that order; an empty key means anonymous access.
//!
//! Only submission is retried: connection failures, timeouts and 5xx answers
//! get up to [`MAX_RETRY_COUNT`] attempts. Lookups fail on the first error.

use super::{Tracker, MAX_RETRY_COUNT};
use crate::libs::activity::Activity;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Error;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::time_entry::{Issue, TimeEntry};
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-Redmine-API-Key";
const API_KEY_ENV: &str = "REDMINE_API_KEY";
const SECRET_FILE: &str = ".redmine_secret";
const ACTIVITIES_PATH: &str = "enumerations/time_entry_activities.json";
const TIME_ENTRIES_PATH: &str = "time_entries.json";
const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Deserialize, Debug)]
struct IssueResponse {
    issue: RedmineIssue,
}

#[derive(Deserialize, Debug)]
struct RedmineIssue {
    id: u32,
    subject: String,
    project: NamedRef,
}

#[derive(Deserialize, Debug)]
struct NamedRef {
    name: String,
}

#[derive(Deserialize, Debug)]
struct ActivitiesResponse {
    time_entry_activities: Vec<RedmineActivity>,
}

#[derive(Deserialize, Debug)]
struct RedmineActivity {
    id: u32,
    name: String,
    // Older Redmine versions omit the flag and only list active entries
    #[serde(default = "active_by_default")]
    active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Serialize, Debug)]
struct TimeEntryRequest<'a> {
    time_entry: NewTimeEntry<'a>,
}

#[derive(Serialize, Debug)]
struct NewTimeEntry<'a> {
    issue_id: u32,
    spent_on: String,
    hours: f64,
    activity_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct ErrorsResponse {
    errors: Vec<String>,
}

#[derive(Debug)]
pub struct Redmine {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    secret: Option<Secret>,
    retry_delay: Duration,
}

impl Redmine {
    /// Creates a client from the config, resolving the API key (this may prompt).
    pub fn new(config: &RedmineConfig) -> Result<Self> {
        let configured = config
            .api_key
            .clone()
            .or_else(|| env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        let redmine = match configured {
            Some(api_key) => Self::with_api_key(&config.api_url, Some(api_key)),
            None => {
                let secret = api_key_secret()?;
                let api_key = Some(secret.get_or_prompt()?).filter(|key| !key.trim().is_empty());
                Self {
                    secret: Some(secret),
                    ..Self::with_api_key(&config.api_url, api_key)
                }
            }
        };
        Ok(redmine)
    }

    pub fn with_api_key(api_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            secret: None,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Overrides the pause between submission attempts.
    pub fn with_retry_delay(self, retry_delay: Duration) -> Self {
        Self { retry_delay, ..self }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(method = method.as_str(), url = url.as_str(), "redmine request");
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(api_key) => builder.header(API_KEY_HEADER, api_key),
            None => builder,
        }
    }

    /// Turns a non-success status into an error; 401 also drops the cached key.
    fn check(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::UNAUTHORIZED => {
                if let Some(secret) = &self.secret {
                    secret.forget()?;
                }
                msg_bail_anyhow!(Message::ApiKeyRejected)
            }
            status if !status.is_success() => {
                msg_bail_anyhow!(Message::RequestFailed(response.url().to_string(), status.to_string()))
            }
            _ => Ok(response),
        }
    }

    async fn rejection(response: Response) -> Error {
        let status = response.status().to_string();
        let body = response.text().await.unwrap_or_default();
        let details = serde_json::from_str::<ErrorsResponse>(&body)
            .map(|errors| errors.errors.join("; "))
            .ok()
            .filter(|details| !details.is_empty())
            .unwrap_or(body);
        Error::Submission { status, details }
    }
}

fn api_key_secret() -> Result<Secret> {
    Secret::new(&DataStorage::new(), SECRET_FILE, &Message::PromptRedmineApiKey.to_string())
}

/// Removes the encrypted API key cache, if any.
pub fn forget_cached_api_key() -> Result<()> {
    api_key_secret()?.forget()
}

impl Tracker for Redmine {
    async fn issue(&self, id: u32) -> Result<Issue> {
        let response = self.request(Method::GET, &format!("issues/{}.json", id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id).into());
        }

        let issue = self.check(response)?.json::<IssueResponse>().await?.issue;
        Ok(Issue {
            id: issue.id,
            title: issue.subject,
            project: issue.project.name,
        })
    }

    async fn activities(&self) -> Result<Vec<Activity>> {
        let response = self.request(Method::GET, ACTIVITIES_PATH).send().await?;
        let activities = self.check(response)?.json::<ActivitiesResponse>().await?;

        Ok(activities
            .time_entry_activities
            .into_iter()
            .filter(|activity| activity.active)
            .map(|activity| Activity {
                id: activity.id,
                name: activity.name,
            })
            .collect())
    }

    async fn submit_time_entry(&self, entry: &TimeEntry) -> Result<()> {
        let body = TimeEntryRequest {
            time_entry: NewTimeEntry {
                issue_id: entry.issue.id,
                spent_on: entry.date.format("%Y-%m-%d").to_string(),
                hours: entry.hours,
                activity_id: entry.activity.id,
                comments: entry.comment.as_deref(),
            },
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            let result = self.request(Method::POST, TIME_ENTRIES_PATH).json(&body).send().await;

            let reason = match result {
                Ok(response) if response.status() == StatusCode::CREATED => return Ok(()),
                Ok(response) if response.status().is_server_error() && attempt < MAX_RETRY_COUNT => response.status().to_string(),
                Ok(response) if response.status() == StatusCode::UNAUTHORIZED => return self.check(response).map(drop),
                Ok(response) => return Err(Self::rejection(response).await.into()),
                Err(e) if (e.is_connect() || e.is_timeout()) && attempt < MAX_RETRY_COUNT => e.to_string(),
                Err(e) => return Err(e.into()),
            };

            msg_warning!(Message::SubmissionRetry(attempt, reason));
            tokio::time::sleep(self.retry_delay).await;
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RedmineConfig {
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl RedmineConfig {
    /// Asks for the Redmine settings, offering the current values as defaults.
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            api_key: None,
        });

        msg_print!(Message::ConfigModuleRedmine);

        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRedmineUrl.to_string())
            .default(config.api_url)
            .interact_text()?;

        let store_api_key = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStoreApiKeyInConfig.to_string())
            .default(config.api_key.is_some())
            .interact()?;

        let api_key = if store_api_key {
            let api_key = Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRedmineApiKey.to_string())
                .allow_empty_password(true)
                .interact()?;
            Some(api_key).filter(|key| !key.trim().is_empty())
        } else {
            None
        };

        Ok(Self {
            api_url: api_url.trim().to_string(),
            api_key,
        })
    }
}
