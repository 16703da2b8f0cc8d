pub const DEFAULT_URL: &str = "https://www.example.com/api/endpoint?caseId=4&clientId=7h2";

pub const DEFAULT_SCHEMA: &str = r#"{
    "clientId": "number?",
    "caseId": "number",
    "typeId": "number=-1",
    "type": "string=DefaultType",
    "debug": "boolean=true"
}"#;

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn demo_url() -> String {
    std::env::var("TYPED_PARAMS_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

pub fn demo_schema() -> String {
    std::env::var("TYPED_PARAMS_SCHEMA")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SCHEMA.to_string())
}

pub fn log_filter() -> String {
    std::env::var("TYPED_PARAMS_LOG")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
