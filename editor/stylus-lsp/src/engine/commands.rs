//! Workspace commands exposed through `workspace/executeCommand`
//!
//! These only report that the action started; contract tooling is not wired in.

/// Commands the server registers with the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylusCommand {
    ValidateContract,
    RunTests,
    DeployContract,
}

impl StylusCommand {
    pub const ALL: [StylusCommand; 3] = [
        StylusCommand::ValidateContract,
        StylusCommand::RunTests,
        StylusCommand::DeployContract,
    ];

    /// Command identifier sent by the client
    pub fn id(self) -> &'static str {
        match self {
            StylusCommand::ValidateContract => "stylus.validateContract",
            StylusCommand::RunTests => "stylus.runTests",
            StylusCommand::DeployContract => "stylus.deployContract",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    /// Message shown to the user when the command runs
    pub fn message(self) -> &'static str {
        match self {
            StylusCommand::ValidateContract => "Validating contract...",
            StylusCommand::RunTests => "Running tests...",
            StylusCommand::DeployContract => "Deploying contract...",
        }
    }

    /// Identifiers of every command, for the server capabilities
    pub fn ids() -> Vec<String> {
        Self::ALL.iter().map(|command| command.id().to_string()).collect()
    }
}
