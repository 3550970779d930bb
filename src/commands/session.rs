//! Interactive Session
//!
//! Line-oriented front end over one `AppState`, so cooldown, stats and the
//! ledger persist across commands for the life of the process.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use copyforge_copywriting::template;
use copyforge_core::{GenerationInputs, GenerationResult, TemplateId};

use crate::services::export::{export_saved, write_export};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

use super::generation::write_generation;

pub const HELP: &str = "Commands:
  template <id>        select a template (see `templates`)
  templates            list template ids
  set <field> <value>  set an input (product, category, features, audience, tone, length, focus)
  show                 show the current template and inputs
  generate             generate copy for the current template and inputs
  save                 save the last generation
  saved                list saved outputs
  copy [id]            print raw content of the last generation or a saved output
  export [id]          export the last generation or a saved output to a file
  stats                show generation stats
  analytics            show template usage across saved outputs
  help                 show this help
  quit                 leave the session";

/// What a session line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(String),
    Quit,
}

/// Mutable per-session selection on top of the shared state
pub struct Session<'a> {
    state: &'a AppState,
    template_id: TemplateId,
    inputs: GenerationInputs,
    last: Option<(TemplateId, GenerationInputs, GenerationResult)>,
}

impl<'a> Session<'a> {
    pub fn new(state: &'a AppState, template_id: TemplateId, inputs: GenerationInputs) -> Self {
        Self {
            state,
            template_id,
            inputs,
            last: None,
        }
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn inputs(&self) -> &GenerationInputs {
        &self.inputs
    }

    /// Execute one command line.
    pub async fn execute(&mut self, line: &str) -> AppResult<Step> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let output = match command {
            "" => String::new(),
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" => return Ok(Step::Quit),
            "templates" => TemplateId::ALL
                .iter()
                .map(|id| format!("{:<20} {}", id.as_str(), template(*id).display_name))
                .collect::<Vec<_>>()
                .join("\n"),
            "template" => {
                self.template_id = rest.parse()?;
                format!("template: {}", self.template_id)
            }
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(f, v)| (f, v.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(AppError::validation("usage: set <field> <value>"));
                }
                self.inputs.set_field(field, value)?;
                format!("{} = {}", field, value)
            }
            "show" => self.describe(),
            "generate" => self.generate().await?,
            "save" => {
                let (template_id, inputs, result) = self
                    .last
                    .as_ref()
                    .ok_or_else(|| AppError::validation("nothing to save; generate first"))?;
                let saved = self.state.save_output(result, *template_id, inputs).await;
                format!("saved as {}", saved.id)
            }
            "saved" => {
                let saved = self.state.saved_outputs().await;
                if saved.is_empty() {
                    "no saved outputs".to_string()
                } else {
                    saved
                        .iter()
                        .map(|s| {
                            format!(
                                "{}  {:<20} {}  ~{} tokens",
                                s.id,
                                s.template_id.as_str(),
                                s.created_at.format("%Y-%m-%d %H:%M:%S"),
                                s.token_estimate()
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            "copy" => match parse_id(rest)? {
                Some(id) => self.state.get_saved(id).await?.content,
                None => self.last_result()?.text.clone(),
            },
            "export" => {
                let path = match parse_id(rest)? {
                    Some(id) => {
                        let saved = self.state.get_saved(id).await?;
                        write_export(&self.state.config().export_dir, &export_saved(&saved))?
                    }
                    None => {
                        let (template_id, _, result) = self
                            .last
                            .as_ref()
                            .ok_or_else(|| AppError::validation("nothing to export; generate first"))?;
                        write_generation(self.state, *template_id, &result.text)?
                    }
                };
                format!("exported to {}", path.display())
            }
            "stats" => {
                let stats = self.state.stats().await;
                format!(
                    "requests: {}\ntokens used: {}\nlast generation: {} ms",
                    stats.request_count, stats.tokens_used, stats.last_elapsed_ms
                )
            }
            "analytics" => {
                let snapshot = self.state.analytics().await;
                let mut lines = vec![
                    format!("requests: {}", snapshot.request_count),
                    format!("tokens used: {}", snapshot.tokens_used),
                    format!("saved outputs: {}", snapshot.saved_count),
                ];
                for usage in &snapshot.distribution {
                    lines.push(format!(
                        "{:<20} {:>3}  {:>5.1}%",
                        usage.display_name, usage.count, usage.percentage
                    ));
                }
                lines.join("\n")
            }
            other => {
                return Err(AppError::validation(format!(
                    "unknown command '{}'; type `help`",
                    other
                )))
            }
        };
        Ok(Step::Output(output))
    }

    async fn generate(&mut self) -> AppResult<String> {
        let result = self.state.generate(self.template_id, &self.inputs).await?;
        let mut output = result.text.clone();
        if let Some(notice) = result.notice.as_deref().filter(|_| result.source.is_degraded()) {
            output.push_str(&format!("\n\n[{}] {}", result.source, notice));
        }
        self.last = Some((self.template_id, self.inputs.clone(), result));
        Ok(output)
    }

    fn last_result(&self) -> AppResult<&GenerationResult> {
        self.last
            .as_ref()
            .map(|(_, _, result)| result)
            .ok_or_else(|| AppError::validation("nothing generated yet"))
    }

    fn describe(&self) -> String {
        let t = template(self.template_id);
        let mut lines = vec![format!("template: {} ({})", t.id, t.display_name)];
        for name in GenerationInputs::FIELD_NAMES {
            let value = self.inputs.field(name).unwrap_or_default();
            lines.push(format!("{}: {}", name, value));
        }
        lines.join("\n")
    }
}

fn parse_id(text: &str) -> AppResult<Option<u64>> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<u64>()
        .map(Some)
        .map_err(|_| AppError::validation(format!("invalid id '{}'", text)))
}

/// Drive a session from `reader` until EOF or `quit`.
///
/// Command errors are reported on `out` and the session continues.
pub async fn run_session<R, W>(mut session: Session<'_>, reader: R, out: &mut W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    write!(out, "> ")?;
    out.flush()?;
    while let Some(line) = lines.next_line().await? {
        match session.execute(&line).await {
            Ok(Step::Quit) => break,
            Ok(Step::Output(text)) => {
                if !text.is_empty() {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use copyforge_core::{GenerationInputsBuilder, ManualClock};

    use crate::models::settings::AppConfig;

    fn state() -> AppState {
        AppState::with_parts(AppConfig::default(), None, Arc::new(ManualClock::new(1_000)))
    }

    #[tokio::test]
    async fn test_set_and_show() {
        let state = state();
        let mut session = Session::new(&state, TemplateId::ProductDescription, GenerationInputs::default());

        session.execute("set product Acme Runner").await.unwrap();
        session.execute("set tone friendly").await.unwrap();
        session.execute("template email-campaign").await.unwrap();

        let Step::Output(shown) = session.execute("show").await.unwrap() else {
            panic!("expected output");
        };
        assert!(shown.contains("template: email-campaign"));
        assert!(shown.contains("productName: Acme Runner"));
        assert!(shown.contains("tone: friendly"));
    }

    #[tokio::test]
    async fn test_generate_save_copy() {
        let state = state();
        let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();
        let mut session = Session::new(&state, TemplateId::SocialMedia, inputs);

        assert!(session.execute("save").await.is_err());
        let Step::Output(text) = session.execute("generate").await.unwrap() else {
            panic!("expected output");
        };
        assert!(text.contains("[fallback-no-key]"));

        assert_eq!(
            session.execute("save").await.unwrap(),
            Step::Output("saved as 1000".to_string())
        );
        let Step::Output(copied) = session.execute("copy 1000").await.unwrap() else {
            panic!("expected output");
        };
        assert!(!copied.contains("[fallback-no-key]"));
        assert_eq!(copied, state.latest_saved().await.unwrap().content);
    }

    #[tokio::test]
    async fn test_cooldown_reported_as_error() {
        let state = state();
        let inputs = GenerationInputsBuilder::new("Acme").build().unwrap();
        let mut session = Session::new(&state, TemplateId::SocialMedia, inputs);

        session.execute("generate").await.unwrap();
        let err = session.execute("generate").await.unwrap_err();
        assert!(err.to_string().contains("Please wait 10 seconds"));
    }

    #[tokio::test]
    async fn test_unknown_command_and_template() {
        let state = state();
        let mut session = Session::new(&state, TemplateId::SocialMedia, GenerationInputs::default());
        assert!(session.execute("dance").await.is_err());
        assert!(session.execute("template haiku").await.is_err());
        assert_eq!(session.template_id(), TemplateId::SocialMedia);
        assert_eq!(session.execute("quit").await.unwrap(), Step::Quit);
    }

    #[tokio::test]
    async fn test_run_session_reports_errors_and_continues() {
        let state = state();
        let session = Session::new(&state, TemplateId::PressRelease, GenerationInputs::default());
        let script: &[u8] = b"generate\nset product Acme\ngenerate\nstats\nquit\nshow\n";
        let mut out = Vec::new();

        run_session(session, tokio::io::BufReader::new(script), &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("error: Validation error: productName required"));
        assert!(out.contains("**FOR IMMEDIATE RELEASE**"));
        assert!(out.contains("requests: 1"));
        assert!(!out.contains("template: press-release"));
    }
}
