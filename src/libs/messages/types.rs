#[derive(Debug, Clone)]
pub enum Message {
    // === TIME ENTRY MESSAGES ===
    TimeEntryHeader,
    ConfirmTimeEntry,
    TimeEntryAdded(u32), // issue id
    TimeEntryCancelled,
    IssueFromBranch(u32), // issue id

    // === ACTIVITY MESSAGES ===
    ActivitiesHeader,
    NoActivities,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),   // path
    ConfigDeleted(String), // path
    ConfigModuleRedmine,
    PromptRedmineUrl,
    PromptRedmineApiKey,
    PromptStoreApiKeyInConfig,

    // === TRACKER MESSAGES ===
    ApiKeyRejected,
    RequestFailed(String, String), // url, status
    SubmissionRetry(u32, String),  // attempt, reason
}
