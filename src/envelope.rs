use serde::Serialize;
use serde_json::Value;

/// Uniform result wrapper printed for every invocation
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok<T: Serialize>(data: T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Envelope {
                success: true,
                data: Some(value),
                error: None,
            },
            Err(e) => Envelope::fail(e.to_string()),
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn usage() -> Self {
        Envelope::fail("Usage: ytprobe <metadata|transcript|stream> <video_id>")
    }

    pub fn unknown_command(command: &str) -> Self {
        Envelope::fail(format!(
            "Unknown command: {command}. Use \"metadata\", \"transcript\", or \"stream\""
        ))
    }

    /// Pretty-print with 2-space indentation
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!("{{\n  \"success\": false,\n  \"error\": \"{e}\"\n}}")
        })
    }
}
