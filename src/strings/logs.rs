pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn server_starting(name: &str, timeout: u64) -> String {
    format!("Starting {name} on stdio (tool timeout {timeout}s)")
}

pub const SERVER_STOPPED: &str = "MCP session closed";

pub fn tool_called(tool: &str) -> String {
    format!("Tool call: {tool}")
}

pub fn tool_timeout(tool: &str, secs: u64) -> String {
    format!("Tool {tool} exceeded {secs}s, abandoning call")
}

pub fn executing_sql(db: &str, sql: &str) -> String {
    format!("[{db}] executing: {sql}")
}

pub fn connection_close_failed(err: &str) -> String {
    format!("Closing database connection failed: {err}")
}

pub fn llm_request(model: &str, endpoint: &str) -> String {
    format!("Requesting review from {model} at {endpoint}")
}

pub const LLM_NON_JSON: &str = "LLM reply was not a JSON object with a response field, using raw body";
