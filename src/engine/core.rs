use std::fmt;

use strum_macros::{Display, EnumIter};

use crate::data::{AppConfig, AppData, ProgramCatalog};

use super::link::{build_affiliate_link, validate_supplied_link};
use super::narrative::render_narrative;

/// Which of the two mutually-exclusive input surfaces feeds the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum InputMode {
    /// A short affiliate code; the link is built from the configured base URL
    #[default]
    Code,
    /// A complete pre-built link, used verbatim after validation
    Link,
}

/// One generation attempt, as read off the form.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub program_key: Option<&'a str>,
    pub input_mode: InputMode,
    pub code: &'a str,
    pub link: &'a str,
    pub konfirmasi_override: &'a str,
}

/// The finished link + narrative of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub link: String,
    pub narrative: String,
}

/// Failures of the validation ladder, in evaluation order. Each maps to one
/// distinct user-facing message; none mutates previously generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The two JSON documents have not been loaded (or failed to load)
    DataNotReady,
    /// No program selected in the dropdown
    ProgramMissing,
    /// Code mode with an empty (after trimming) code field
    CodeMissing,
    /// Link mode with an empty (after trimming) link field
    LinkMissing,
    /// Link mode value does not parse as an absolute URL
    LinkMalformed,
    /// Link mode value lacks the affiliate_code query parameter
    LinkMissingAffiliateParam,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::DataNotReady => write!(f, "configuration data not loaded"),
            GenerateError::ProgramMissing => write!(f, "no program selected"),
            GenerateError::CodeMissing => write!(f, "affiliate code is empty"),
            GenerateError::LinkMissing => write!(f, "affiliate link is empty"),
            GenerateError::LinkMalformed => write!(f, "affiliate link is not a valid URL"),
            GenerateError::LinkMissingAffiliateParam => {
                write!(f, "affiliate link lacks the affiliate_code parameter")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// The generation engine. Owns the loaded documents; `generate` is a pure
/// function of its inputs, so the UI stays a thin adapter around it.
#[derive(Debug, Clone)]
pub struct Engine {
    data: AppData,
}

impl Engine {
    pub fn new(data: AppData) -> Self {
        Self { data }
    }

    pub fn config(&self) -> &AppConfig {
        &self.data.config
    }

    pub fn programs(&self) -> &ProgramCatalog {
        &self.data.programs
    }

    /// Run the validation ladder and produce link + narrative.
    ///
    /// First failure wins; a failure leaves no trace, so the caller keeps
    /// whatever it generated before.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GeneratedOutput, GenerateError> {
        let program_key = request
            .program_key
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::ProgramMissing)?;
        let program = self
            .data
            .programs
            .get(program_key)
            .ok_or(GenerateError::ProgramMissing)?;

        let link = match request.input_mode {
            InputMode::Code => {
                let code = request.code.trim();
                if code.is_empty() {
                    return Err(GenerateError::CodeMissing);
                }
                build_affiliate_link(&self.data.config.base_url, &program.path, code)
            }
            InputMode::Link => {
                let supplied = request.link.trim();
                if supplied.is_empty() {
                    return Err(GenerateError::LinkMissing);
                }
                validate_supplied_link(supplied)?;
                supplied.to_string()
            }
        };

        let konfirmasi_override = request.konfirmasi_override.trim();
        let konfirmasi = if konfirmasi_override.is_empty() {
            self.data.config.konfirmasi_default.as_str()
        } else {
            konfirmasi_override
        };

        let narrative = render_narrative(&program.text, &link, &self.data.config, konfirmasi);

        Ok(GeneratedOutput { link, narrative })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Program, RekeningConfig};

    fn test_engine() -> Engine {
        Engine::new(AppData {
            config: AppConfig {
                base_url: "https://x.org".to_string(),
                konfirmasi_default: "0812".to_string(),
                rekening: RekeningConfig {
                    bsi: "1".to_string(),
                    an_bsi: "A".to_string(),
                    mandiri: "2".to_string(),
                    an_mandiri: "B".to_string(),
                },
            },
            programs: ProgramCatalog::from_entries(vec![(
                "promo".to_string(),
                Program {
                    name: "Promo".to_string(),
                    path: "/promo".to_string(),
                    text: "Join {LINK} now".to_string(),
                },
            )]),
        })
    }

    fn code_request<'a>(code: &'a str, konfirmasi: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            program_key: Some("promo"),
            input_mode: InputMode::Code,
            code,
            link: "",
            konfirmasi_override: konfirmasi,
        }
    }

    fn link_request(link: &str) -> GenerateRequest<'_> {
        GenerateRequest {
            program_key: Some("promo"),
            input_mode: InputMode::Link,
            code: "",
            link,
            konfirmasi_override: "",
        }
    }

    #[test]
    fn code_mode_builds_link_and_narrative() {
        let output = test_engine()
            .generate(&code_request("abc", ""))
            .expect("generation should succeed");

        assert_eq!(output.link, "https://x.org/promo?affiliate_code=abc");
        assert_eq!(
            output.narrative,
            "Join https://x.org/promo?affiliate_code=abc now\
             \n\nRekening:\n🏦 BSI 1\na.n A\n🏦 Mandiri 2\na.n B\n\n📞 Konfirmasi: 0812"
        );
    }

    #[test]
    fn code_is_trimmed_then_percent_encoded() {
        let output = test_engine()
            .generate(&code_request("  a b  ", ""))
            .expect("generation should succeed");
        assert_eq!(output.link, "https://x.org/promo?affiliate_code=a%20b");
    }

    #[test]
    fn konfirmasi_override_replaces_the_default() {
        let output = test_engine()
            .generate(&code_request("abc", " 0899 "))
            .expect("generation should succeed");
        assert!(output.narrative.ends_with("📞 Konfirmasi: 0899"));
    }

    #[test]
    fn missing_program_wins_over_missing_code() {
        let engine = test_engine();
        let mut request = code_request("", "");
        request.program_key = None;
        assert_eq!(engine.generate(&request), Err(GenerateError::ProgramMissing));

        request.program_key = Some("");
        assert_eq!(engine.generate(&request), Err(GenerateError::ProgramMissing));

        request.program_key = Some("unknown");
        assert_eq!(engine.generate(&request), Err(GenerateError::ProgramMissing));
    }

    #[test]
    fn empty_code_is_rejected() {
        assert_eq!(
            test_engine().generate(&code_request("   ", "")),
            Err(GenerateError::CodeMissing)
        );
    }

    #[test]
    fn link_mode_uses_the_supplied_link_verbatim() {
        let output = test_engine()
            .generate(&link_request("https://other.org/p?affiliate_code=a%2Fb"))
            .expect("generation should succeed");

        // No re-encoding, no mutation
        assert_eq!(output.link, "https://other.org/p?affiliate_code=a%2Fb");
        assert!(
            output
                .narrative
                .starts_with("Join https://other.org/p?affiliate_code=a%2Fb now")
        );
    }

    #[test]
    fn link_mode_rejection_ladder() {
        let engine = test_engine();

        assert_eq!(
            engine.generate(&link_request("  ")),
            Err(GenerateError::LinkMissing)
        );
        assert_eq!(
            engine.generate(&link_request("x.org/promo")),
            Err(GenerateError::LinkMalformed)
        );
        assert_eq!(
            engine.generate(&link_request("https://x.org/promo?foo=1")),
            Err(GenerateError::LinkMissingAffiliateParam)
        );
    }
}
