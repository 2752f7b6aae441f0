use clap::Args;
use gigfloww::error::AppError;
use gigfloww::signup::{validate_email, validate_phone, validate_url};
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Email address to validate
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Phone number to validate
    #[arg(long)]
    pub(crate) phone: Option<String>,
    /// Portfolio or profile URL to validate
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Emit results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CheckResult {
    pub(crate) field: &'static str,
    pub(crate) value: String,
    pub(crate) valid: bool,
}

pub(crate) fn check_values(args: &CheckArgs) -> Vec<CheckResult> {
    let checks: [(&'static str, &Option<String>, fn(&str) -> bool); 3] = [
        ("email", &args.email, validate_email),
        ("phone", &args.phone, validate_phone),
        ("url", &args.url, validate_url),
    ];

    checks
        .into_iter()
        .filter_map(|(field, value, validator)| {
            value.as_ref().map(|value| CheckResult {
                field,
                value: value.clone(),
                valid: validator(value),
            })
        })
        .collect()
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let results = check_values(&args);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("Nothing to check. Pass --email, --phone or --url.");
        return Ok(());
    }

    for result in &results {
        let verdict = if result.valid { "valid" } else { "invalid" };
        println!("{:<6} {:<8} {}", result.field, verdict, result.value);
    }
    Ok(())
}
