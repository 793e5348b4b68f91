use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use volt_core::ModuleName;

use super::UnwrapOrExit;
use crate::{
    ops::{self, create_module::CreateModuleOptions},
    prompt::{DialoguerPrompter, Prompter},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CreateModuleCommand {
    /// Directory that contains the features folder
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Preview the files without writing them
    #[arg(short, long)]
    pub dry_run: bool,

    /// Module name (asked for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Include the shared hooks, services and constants
    #[arg(long, conflicts_with = "no_hooks")]
    pub hooks: bool,

    /// Leave out the shared hooks without asking
    #[arg(long)]
    pub no_hooks: bool,
}

/// Answers collected from flags and prompts.
#[derive(Debug, PartialEq, Eq)]
struct Answers {
    include_infra: bool,
    name: String,
}

impl CreateModuleCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        let answers = self.answers(&mut DialoguerPrompter::new())?;

        let name = ModuleName::parse(&answers.name).unwrap_or_exit();
        out.info(&format!("Creating module \"{name}\""));

        let result = ops::create_module(CreateModuleOptions {
            base_path: &self.path,
            name: &name,
            include_infra: answers.include_infra,
            dry_run: self.dry_run,
        });
        if let Err(err) = &result {
            report_partial(err.written(), &mut out);
        }

        result.unwrap_or_exit().render(&mut out);
        Ok(())
    }

    fn hooks_flag(&self) -> Option<bool> {
        if self.hooks {
            Some(true)
        } else if self.no_hooks {
            Some(false)
        } else {
            None
        }
    }

    /// Fill in whatever the flags leave open, hooks first.
    fn answers(&self, prompter: &mut dyn Prompter) -> Result<Answers> {
        let include_infra = match self.hooks_flag() {
            Some(include) => include,
            None => prompter.ask_yes_no("Do you want to include custom hooks?", false)?,
        };

        let name = match &self.name {
            Some(name) => name.clone(),
            None => prompter.ask_text("Enter module name")?,
        };

        Ok(Answers {
            include_infra,
            name,
        })
    }
}

/// List files a failed run left behind.
fn report_partial(written: &[PathBuf], out: &mut dyn Output) {
    if written.is_empty() {
        return;
    }
    for path in written {
        out.success(&format!("Created: {}", path.display()));
    }
    out.error(&format!(
        "{} file(s) were written before the failure and left in place",
        written.len()
    ));
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use clap::Parser;

    use super::*;
    use crate::reports::RecordingOutput;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        cmd: CreateModuleCommand,
    }

    fn parse(args: &[&str]) -> CreateModuleCommand {
        let argv = std::iter::once("create-module").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().cmd
    }

    /// Replays canned answers and records the questions asked.
    #[derive(Default)]
    struct ScriptedPrompter {
        yes_no: VecDeque<bool>,
        text: VecDeque<String>,
        asked: Vec<String>,
    }

    impl Prompter for ScriptedPrompter {
        fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
            self.asked.push(prompt.to_string());
            Ok(self.yes_no.pop_front().unwrap_or(default))
        }

        fn ask_text(&mut self, prompt: &str) -> Result<String> {
            self.asked.push(prompt.to_string());
            self.text
                .pop_front()
                .ok_or_else(|| eyre::eyre!("no scripted answer for '{prompt}'"))
        }
    }

    #[test]
    fn test_defaults() {
        let cmd = parse(&[]);
        assert_eq!(cmd.path, PathBuf::from("."));
        assert!(!cmd.dry_run);
        assert_eq!(cmd.name, None);
        assert_eq!(cmd.hooks_flag(), None);
    }

    #[test]
    fn test_hooks_flags_conflict() {
        let argv = ["create-module", "--hooks", "--no-hooks"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_prompts_hooks_then_name() {
        let cmd = parse(&["--path", "app"]);
        let mut prompter = ScriptedPrompter {
            yes_no: VecDeque::from([true]),
            text: VecDeque::from(["user profile".to_string()]),
            ..Default::default()
        };

        let answers = cmd.answers(&mut prompter).unwrap();

        assert_eq!(
            answers,
            Answers {
                include_infra: true,
                name: "user profile".to_string(),
            }
        );
        assert_eq!(
            prompter.asked,
            vec!["Do you want to include custom hooks?", "Enter module name"]
        );
    }

    #[test]
    fn test_hooks_prompt_defaults_to_no() {
        let cmd = parse(&["--name", "widget"]);
        let mut prompter = ScriptedPrompter::default();

        let answers = cmd.answers(&mut prompter).unwrap();

        assert!(!answers.include_infra);
        assert_eq!(prompter.asked, vec!["Do you want to include custom hooks?"]);
    }

    #[test]
    fn test_flags_skip_prompts() {
        let cmd = parse(&["-n", "widget", "--no-hooks", "-d"]);
        let mut prompter = ScriptedPrompter::default();

        let answers = cmd.answers(&mut prompter).unwrap();

        assert!(prompter.asked.is_empty());
        assert!(!answers.include_infra);
        assert_eq!(answers.name, "widget");
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_empty_answer_is_passed_through() {
        let cmd = parse(&["--hooks"]);
        let mut prompter = ScriptedPrompter {
            text: VecDeque::from(["   ".to_string()]),
            ..Default::default()
        };

        let answers = cmd.answers(&mut prompter).unwrap();

        assert!(answers.include_infra);
        assert!(ModuleName::parse(&answers.name).is_err());
    }

    #[test]
    fn test_report_partial_lists_written_files() {
        let mut out = RecordingOutput::default();
        report_partial(&[PathBuf::from("/app/features/a/page.tsx")], &mut out);

        assert_eq!(
            out.lines,
            vec![
                "success: Created: /app/features/a/page.tsx",
                "error: 1 file(s) were written before the failure and left in place",
            ]
        );
    }

    #[test]
    fn test_report_partial_is_silent_without_writes() {
        let mut out = RecordingOutput::default();
        report_partial(&[], &mut out);
        assert!(out.lines.is_empty());
    }
}
