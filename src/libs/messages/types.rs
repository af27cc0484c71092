//! All user-facing message texts, collected in a single enum.
//!
//! Keeping the texts in one place keeps wording consistent across commands
//! and lets tests assert against structured variants instead of raw strings.
//! The `Display` implementation lives in [`super::display`].

#[derive(Debug, Clone)]
pub enum Message {
    // === TRACKER MESSAGES ===
    WorkingOn(String),
    TwiddlingThumbs,
    NoActiveTask,
    ActiveTask(String, String), // task, human duration

    // === REPORT MESSAGES ===
    NothingLoggedToday,
    LoggedTodayHeader(String, f64), // total human duration, percent of workday

    // === PUSH MESSAGES ===
    NothingToPush,
    WorklogPushed(String, String),    // task, human duration
    WorklogPushFailed(String, String), // task, diagnostic

    // === CLEAR MESSAGES ===
    ConfirmClearLogs(String), // "all" or a task id
    LogsDeleted(String),
    NothingDeleted,

    // === TASK LISTING MESSAGES ===
    NoOpenSubtasks,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleJira,
    JiraNotConfigured,
    PromptJiraUrl,
    PromptJiraLogin,
    PromptJiraApiToken,
    PromptDbFile,
}
