//! One-shot smoke test of the generation endpoint.

use crate::{
    ApiResponse, FailureClass, GenerationClient, SaveAssessment, classify_failure,
};
use chrono::{DateTime, Local};
use qbank_core::{ErrorDetail, FALLBACK_TABLE, GenerateQuestionRequest, GeneratedQuestion};
use tracing::instrument;

const RULE: &str = "============================================================";

/// How the single request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmokeVerdict {
    /// 200 with a readable question
    Saved(SaveAssessment),
    /// 200 whose body is not a JSON object
    MalformedSuccess(String),
    /// Non-200 response. `class` is `None` when the body is not JSON
    Rejected {
        /// HTTP status code
        status: u16,
        /// The error detail, if the body could be parsed
        detail: Option<String>,
        /// Classification of the detail
        class: Option<FailureClass>,
    },
    /// The request never got a response
    RequestFailed(String),
}

/// Result of a smoke test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeOutcome {
    /// Whether generation and saving worked
    pub passed: bool,
    /// One-line result
    pub message: String,
    /// Detailed verdict
    pub verdict: SmokeVerdict,
}

/// Smoke test over a [`GenerationClient`].
pub struct SmokeTest<'a> {
    client: &'a GenerationClient,
    request: GenerateQuestionRequest,
}

impl<'a> SmokeTest<'a> {
    /// Create a smoke test for one request.
    pub fn new(client: &'a GenerationClient, request: GenerateQuestionRequest) -> Self {
        Self { client, request }
    }

    /// Send the request and print an analysis of the response.
    ///
    /// Never fails: transport errors become [`SmokeVerdict::RequestFailed`].
    #[instrument(skip(self))]
    pub async fn run(&self) -> SmokeOutcome {
        let qt = self.request.question_type;
        let config = self.client.config();

        println!("FOCUSED {} CONSTRAINT WORKAROUND TEST", qt);
        println!("{}", RULE);
        println!(
            "EXPECTED: {} questions save successfully to {} table",
            qt, FALLBACK_TABLE
        );
        println!();
        println!("Testing {} Question Generation...", qt);
        println!("   Base URL: {}", config.base_url);
        println!("   API URL: {}", config.api_url());
        println!("   Topic ID: {}", self.request.topic_id);
        println!("   Question Type: {}", qt);

        println!();
        println!("Making POST request...");
        println!("   URL: {}", config.generate_url());
        println!("   Headers: Content-Type: application/json");
        match serde_json::to_string_pretty(&self.request) {
            Ok(payload) => println!("   Payload: {}", payload),
            Err(e) => tracing::warn!("Could not render payload: {}", e),
        }

        let response = match self.client.generate_question(&self.request).await {
            Ok(response) => response,
            Err(e) => {
                println!();
                println!("EXCEPTION - Error: {}", e.kind);
                println!("CONSTRAINT WORKAROUND TEST: ERROR");
                println!("   - Network or request error occurred");
                println!("   - Cannot determine if workaround is working");
                return SmokeOutcome {
                    passed: false,
                    message: format!("Request exception: {}", e.kind),
                    verdict: SmokeVerdict::RequestFailed(e.kind.to_string()),
                };
            }
        };

        println!();
        println!("Response received:");
        println!("   Status Code: {}", response.status);
        let headers = response
            .headers
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        println!("   Response Headers: {{{}}}", headers);
        println!("   Response Size: {} characters", response.body.chars().count());

        if response.is_ok() {
            self.analyze_success(&response)
        } else {
            self.analyze_failure(&response)
        }
    }

    fn analyze_success(&self, response: &ApiResponse) -> SmokeOutcome {
        let qt = self.request.question_type;
        println!();
        println!("SUCCESS - {} question generated and saved successfully!", qt);

        let question = match GeneratedQuestion::from_body(&response.body) {
            Ok(question) => question,
            Err(e) => {
                println!();
                println!("JSON parsing error: {}", e.message);
                println!("   Raw response: {}...", truncate(&response.body, 500));
                return SmokeOutcome {
                    passed: false,
                    message: format!("JSON parsing error: {}", e.message),
                    verdict: SmokeVerdict::MalformedSuccess(e.message),
                };
            }
        };

        let text = |name: &str| question.field(name).unwrap_or_default();
        let or_na = |name: &str| question.field(name).unwrap_or_else(|| "N/A".to_string());

        println!();
        println!("Generated {} Question Details:", qt);
        println!("   Question ID: {}", or_na("id"));
        println!("   Question Type: {}", or_na("question_type"));
        println!("   Topic ID: {}", or_na("topic_id"));
        println!("   Question: {}...", truncate(&text("question_statement"), 200));
        println!("   Answer: {}...", truncate(&text("answer"), 150));
        println!("   Solution: {}...", truncate(&text("solution"), 150));
        println!("   Difficulty: {}", or_na("difficulty_level"));

        let table = question.saved_to_table();
        println!("   Saved to table: {}", table);

        let assessment = SaveAssessment::from_table(&table);
        println!();
        println!("WORKAROUND ANALYSIS:");
        let message = match &assessment {
            SaveAssessment::WorkaroundSuccessful => {
                println!(
                    "   WORKAROUND SUCCESSFUL: {} question saved to {} table",
                    qt, FALLBACK_TABLE
                );
                println!("   Schema mapping handled correctly (question_id vs id, no difficulty_level)");
                println!("   Database constraint violation bypassed properly");
                println!();
                println!("CONSTRAINT WORKAROUND TEST: PASSED");
                format!("{} constraint workaround is working correctly", qt)
            }
            SaveAssessment::UnexpectedTable(other) => {
                println!("   UNEXPECTED: {} question saved to {} table", qt, other);
                println!("   Expected: {} table", FALLBACK_TABLE);
                println!("   This might indicate the constraint was fixed in {} table", other);
                println!();
                println!("CONSTRAINT WORKAROUND TEST: UNEXPECTED BEHAVIOR");
                format!(
                    "{} question generated but saved to {} instead of {}",
                    qt, other, FALLBACK_TABLE
                )
            }
        };

        tracing::info!(table = %table, "Generation succeeded");
        SmokeOutcome {
            passed: true,
            message,
            verdict: SmokeVerdict::Saved(assessment),
        }
    }

    fn analyze_failure(&self, response: &ApiResponse) -> SmokeOutcome {
        println!();
        println!("FAILED - Expected 200, got {}", response.status);
        println!("   Full Response: {}", response.body);

        let (detail, class) = match ErrorDetail::from_body(&response.body) {
            Ok(detail) => {
                println!();
                println!("Error Analysis:");
                println!("   Error Detail: {}", detail);
                let class = classify_failure(response.status, detail.as_str());
                print_failure_class(&class, detail.as_str());
                (Some(detail.as_str().to_string()), Some(class))
            }
            Err(e) => {
                tracing::debug!("Error body not parseable: {}", e.message);
                println!("   Could not parse error response");
                (None, None)
            }
        };

        println!();
        println!("CONSTRAINT WORKAROUND TEST: FAILED");
        println!(
            "   - {} question generation still has issues",
            self.request.question_type
        );
        println!("   - Workaround is not working properly");

        tracing::warn!(status = response.status, ?class, "Generation failed");
        SmokeOutcome {
            passed: false,
            message: format!(
                "{} constraint workaround failed: {}",
                self.request.question_type,
                detail.as_deref().unwrap_or("unparseable error response")
            ),
            verdict: SmokeVerdict::Rejected {
                status: response.status,
                detail,
                class,
            },
        }
    }
}

fn print_failure_class(class: &FailureClass, detail: &str) {
    println!();
    match class {
        FailureClass::Constraint(diagnoses) => {
            println!("CONSTRAINT ERROR ANALYSIS:");
            for diagnosis in diagnoses {
                for line in diagnosis.explanation() {
                    println!("   {}", line);
                }
            }
        }
        FailureClass::Quota => {
            println!("API QUOTA ISSUE:");
            println!("   LLM API quota exhausted - cannot test generation");
            println!("   This is not a constraint workaround issue");
        }
        FailureClass::Other => {
            println!("OTHER ERROR:");
            println!("   Error: {}", detail);
        }
    }
}

/// Print the closing summary of a smoke test run.
pub fn print_summary(outcome: &SmokeOutcome, started: DateTime<Local>, finished: DateTime<Local>) {
    println!();
    println!("FOCUSED TEST SUMMARY");
    println!("{}", RULE);
    println!("Test started at: {}", started);
    println!("Test completed at: {}", finished);
    println!();

    if outcome.passed {
        println!("CONSTRAINT WORKAROUND FIX: WORKING");
        println!("   Result: {}", outcome.message);
        println!();
        println!("RECOMMENDATION:");
        println!("   The constraint workaround is working as expected");
        println!("   No further action needed for this fix");
    } else {
        println!("CONSTRAINT WORKAROUND FIX: STILL FAILING");
        println!("   Result: {}", outcome.message);
        println!();
        println!("RECOMMENDATION:");
        println!("   Review the error analysis above for specific issues");
        println!("   Focus on database schema and foreign key constraints");
    }
}

/// First `max` characters of `text`.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("écrire", 3), "écr");
        assert_eq!(truncate("short", 200), "short");
    }
}
