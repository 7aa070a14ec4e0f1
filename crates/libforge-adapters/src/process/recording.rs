//! Scripted tool runner for testing.

use std::fmt;
use std::sync::{Arc, Mutex};

use libforge_core::{
    application::{
        ApplicationError,
        ports::{ToolInvocation, ToolOutput, ToolRunner},
    },
    error::LibforgeResult,
};

type Effect = Arc<dyn Fn(&ToolInvocation) + Send + Sync>;

#[derive(Clone)]
struct Rule {
    program: String,
    args: Vec<String>,
    exit_code: i32,
    effect: Option<Effect>,
}

impl Rule {
    fn matches(&self, invocation: &ToolInvocation) -> bool {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        invocation.is(&self.program, &args)
    }
}

/// Records every invocation and answers with scripted exit codes.
///
/// Unmatched invocations exit with 0. The first matching rule wins. Clones
/// share the recorded calls.
#[derive(Clone, Default)]
pub struct RecordingToolRunner {
    rules: Vec<Rule>,
    calls: Arc<Mutex<Vec<ToolInvocation>>>,
}

impl RecordingToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer invocations of `program` starting with `args` with `exit_code`.
    pub fn with_exit_code(self, program: &str, args: &[&str], exit_code: i32) -> Self {
        self.push_rule(program, args, exit_code, None)
    }

    /// Run `effect` for matching invocations (and exit with 0), e.g. to
    /// create the files a real tool would create.
    pub fn with_effect<F>(self, program: &str, args: &[&str], effect: F) -> Self
    where
        F: Fn(&ToolInvocation) + Send + Sync + 'static,
    {
        self.push_rule(program, args, 0, Some(Arc::new(effect)))
    }

    fn push_rule(mut self, program: &str, args: &[&str], exit_code: i32, effect: Option<Effect>) -> Self {
        let rule = Rule {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            exit_code,
            effect,
        };
        self.rules.push(rule);
        self
    }

    /// Every invocation so far, in call order.
    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of invocations of `program` starting with `args`.
    pub fn count(&self, program: &str, args: &[&str]) -> usize {
        self.invocations()
            .iter()
            .filter(|inv| inv.is(program, args))
            .count()
    }
}

impl fmt::Debug for RecordingToolRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingToolRunner")
            .field("rules", &self.rules.len())
            .field("calls", &self.invocations().len())
            .finish()
    }
}

impl ToolRunner for RecordingToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> LibforgeResult<ToolOutput> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(invocation.clone());

        let Some(rule) = self.rules.iter().find(|r| r.matches(invocation)) else {
            return Ok(ToolOutput::with_exit_code(0));
        };
        if let Some(effect) = &rule.effect {
            effect(invocation);
        }
        Ok(ToolOutput::with_exit_code(rule.exit_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_invocations_succeed_and_are_recorded() {
        let runner = RecordingToolRunner::new();
        let inv = ToolInvocation::new("git", "/w").arg("init");
        assert_eq!(runner.run(&inv).unwrap().exit_code, 0);
        assert_eq!(runner.invocations(), vec![inv]);
    }

    #[test]
    fn first_matching_rule_wins() {
        let runner = RecordingToolRunner::new()
            .with_exit_code("dotnet", &["test"], 1)
            .with_exit_code("dotnet", &[], 7);
        let test = ToolInvocation::new("dotnet", "/w").args(["test", "X.sln"]);
        let pack = ToolInvocation::new("dotnet", "/w").args(["pack", "X.sln"]);
        assert_eq!(runner.run(&test).unwrap().exit_code, 1);
        assert_eq!(runner.run(&pack).unwrap().exit_code, 7);
        assert_eq!(runner.count("dotnet", &[]), 2);
    }

    #[test]
    fn clones_share_calls() {
        let runner = RecordingToolRunner::new();
        let handle = runner.clone();
        runner.run(&ToolInvocation::new("git", "/w")).unwrap();
        assert_eq!(handle.invocations().len(), 1);
    }
}
