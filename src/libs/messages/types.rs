use crate::libs::task::SortKey;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded {
        description: String,
        priority: Option<i32>,
    },
    TaskDeleted(String),
    TaskCompleted(String),
    TaskEdited(i64),
    InvalidTaskNumber,
    InvalidTaskDescription,
    NoTasks,
    TaskList(Vec<String>),
    SearchResults {
        keyword: String,
        lines: Vec<String>,
    },
    NoTasksMatching(String),
    TasksSorted(SortKey),
    TaskTableHeader,
    PlainVariantUnsupported,
    PriorityUnsupportedForPlain,

    // === SHELL MESSAGES ===
    RichMenu,
    PlainMenu,
    InvalidChoice,
    InvalidPriority,
    InvalidNumber,
    InvalidInputs,
    ExitingApplication,

    // === STORE MESSAGES ===
    TasksLoaded(usize, String), // count, path
    TasksSaved(usize, String),  // count, path
    TaskFileMissing(String),    // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigAlreadyAbsent,
    ConfigModuleTaskFile,

    // === PROMPTS ===
    PromptChoice,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptDeleteNumber,
    PromptCompleteNumber,
    PromptEditNumber,
    PromptNewDescription,
    PromptNewPriority,
    PromptSearchKeyword,
    PromptTaskFile,
    PromptVariant,

    // === GENERAL MESSAGES ===
    OperationFailed(String), // error
}
