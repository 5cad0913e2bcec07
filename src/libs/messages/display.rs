use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TIME ENTRY MESSAGES ===
            Message::TimeEntryHeader => "Time entry:".to_string(),
            Message::ConfirmTimeEntry => "Confirm time entry?".to_string(),
            Message::TimeEntryAdded(id) => format!("Time entry added to issue #{}", id),
            Message::TimeEntryCancelled => "cancelled".to_string(),
            Message::IssueFromBranch(id) => format!("Using issue #{} from the current branch", id),

            // === ACTIVITY MESSAGES ===
            Message::ActivitiesHeader => "Activities:".to_string(),
            Message::NoActivities => "The tracker returned no active activities.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted(path) => format!("Configuration {} and cached API key removed", path),
            Message::ConfigModuleRedmine => "Redmine settings".to_string(),
            Message::PromptRedmineUrl => "Enter the Redmine URL".to_string(),
            Message::PromptRedmineApiKey => "Enter your Redmine API key (leave empty for anonymous access)".to_string(),
            Message::PromptStoreApiKeyInConfig => "Store the API key in the config file? (otherwise it is asked once and kept encrypted)".to_string(),

            // === TRACKER MESSAGES ===
            Message::ApiKeyRejected => "Redmine rejected the API key (401 Unauthorized). A cached key is dropped and asked for again on the next run.".to_string(),
            Message::RequestFailed(url, status) => format!("Request to {} failed with status {}", url, status),
            Message::SubmissionRetry(attempt, reason) => format!("Submitting time entry failed (attempt {}): {}; retrying", attempt, reason),
        };
        write!(f, "{}", text)
    }
}
