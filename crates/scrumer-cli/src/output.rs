use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

/// Convert a handler result into the `data` payload of a response.
pub fn item<T: Serialize>(data: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(data)?)
}

pub fn list<T: Serialize>(items: Vec<T>) -> anyhow::Result<Value> {
    let count = items.len();
    item(ListResponse { items, count })
}

fn render<T: Serialize>(response: &CliResponse<T>) -> String {
    serde_json::to_string(response)
        .unwrap_or_else(|e| format!(r#"{{"success":false,"error":"{}"}}"#, e))
}

pub fn output_success(data: Value) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", render(&response));
}

/// Print an error response to stderr and keep going. Used by the shell,
/// where one failed line must not end the session.
pub fn print_error(message: &str) {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", render(&response));
}

/// Outputs an error response to stderr and terminates the process with
/// code 1.
pub fn output_error(message: &str) -> ! {
    print_error(message);
    std::process::exit(1);
}
