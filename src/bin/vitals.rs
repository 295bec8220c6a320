//! Vitals CLI - Command-line interface for Vitals Insight
//!
//! Commands:
//! - report: Build an insight report from a record series
//! - validate: Check a record series for ordering and value issues
//! - schema: Print record/report schema information
//! - doctor: Diagnose engine configuration and input plumbing

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use vitals_insight::record::SeriesIssue;
use vitals_insight::{
    AnalyticsConfig, AnalyticsError, Metric, RecordAdapter, ReportBuilder, ENGINE_VERSION,
    PRODUCER_NAME, REPORT_VERSION,
};

/// Vitals - Deterministic insight engine for daily wellness metrics
#[derive(Parser)]
#[command(name = "vitals")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Derive insights from daily wellness metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an insight report from a record series
    Report {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "json")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,

        /// Trailing window in days
        #[arg(long, default_value = "7")]
        window_days: usize,

        /// Producer instance ID for provenance tracking
        #[arg(long)]
        instance_id: Option<String>,
    },

    /// Check a record series for ordering and value issues
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "json")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (records or report)
        #[arg(value_enum)]
        schema_type: SchemaType,

        /// Output as JSON schema
        #[arg(long)]
        json_schema: bool,
    },

    /// Diagnose engine configuration and input plumbing
    Doctor {
        /// Check a records file
        #[arg(long)]
        records: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// JSON array of records
    Json,
    /// Newline-delimited JSON (one record per line)
    Ndjson,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input record schema (vitals.daily_record.v1)
    Records,
    /// Output report schema (vitals.insight_report.v1)
    Report,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vitals_insight=warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), VitalsCliError> {
    match cli.command {
        Commands::Report {
            input,
            output,
            input_format,
            output_format,
            window_days,
            instance_id,
        } => cmd_report(
            &input,
            &output,
            input_format,
            output_format,
            window_days,
            instance_id,
        ),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Schema {
            schema_type,
            json_schema,
        } => cmd_schema(schema_type, json_schema),

        Commands::Doctor { records, json } => cmd_doctor(records.as_deref(), json),
    }
}

fn cmd_report(
    input: &Path,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    window_days: usize,
    instance_id: Option<String>,
) -> Result<(), VitalsCliError> {
    let records = read_records(input, &input_format)?;

    if records.is_empty() {
        return Err(VitalsCliError::NoRecords);
    }

    let config = AnalyticsConfig {
        window_days,
        ..AnalyticsConfig::default()
    };

    let builder = match instance_id {
        Some(id) => ReportBuilder::with_instance_id(id),
        None => ReportBuilder::new(),
    };

    let report = builder.build(&records, &config)?;

    let output_data = match output_format {
        OutputFormat::Json => serde_json::to_string(&report)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&report)?,
    };

    if output.to_string_lossy() == "-" {
        println!("{output_data}");
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_validate(input: &Path, input_format: InputFormat, json: bool) -> Result<(), VitalsCliError> {
    let records = read_records(input, &input_format)?;
    let issues = RecordAdapter::validate_series(&records);

    let report = ValidationReport {
        total_records: records.len(),
        issue_count: issues.len(),
        issues,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total records: {}", report.total_records);
        println!("Issues found:  {}", report.issue_count);

        if !report.issues.is_empty() {
            println!("\nIssues:");
            for issue in &report.issues {
                println!(
                    "  - Record {} ({:?}): {}",
                    issue.index, issue.kind, issue.detail
                );
            }
        }
    }

    if report.issue_count > 0 {
        Err(VitalsCliError::ValidationFailed(report.issue_count))
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType, json_schema: bool) -> Result<(), VitalsCliError> {
    match schema_type {
        SchemaType::Records => {
            if json_schema {
                println!("{}", records_json_schema());
            } else {
                println!("Input Schema: vitals.daily_record.v1");
                println!();
                println!("A JSON array (or NDJSON stream) of daily records, ordered by");
                println!("ascending date, one record per day:");
                println!();
                println!("  date         - ISO-8601 timestamp for the day");
                println!("  sleepHours   - sleep duration in hours");
                println!("  steps        - step count");
                println!("  heartRateBpm - resting heart rate (bpm)");
                println!("  waterOz      - water intake (fluid ounces)");
                println!("  mood         - self-reported rating, 1-10");
                println!();
                println!("All fields are required. Values outside typical wearable ranges");
                println!("are accepted as-is.");
                println!();
                println!(
                    "Tracked metrics: {}",
                    Metric::ALL.map(|m| m.as_str()).join(", ")
                );
            }
        }
        SchemaType::Report => {
            if json_schema {
                println!("{}", report_json_schema());
            } else {
                println!("Output Schema: vitals.insight_report.v1");
                println!();
                println!("The insight report contains:");
                println!();
                println!("- reportVersion: Schema version ({REPORT_VERSION})");
                println!("- producer: {{ name, version, instance_id }}");
                println!("- generatedAtUtc: Report timestamp");
                println!("- window: {{ requestedDays, recordCount, startDate, endDate }}");
                println!("- summary: per-metric averages, split-half trends, mood readout");
                println!("- snapshot: most recent record with mood label");
                println!("- focus: {{ category, title, recommendation }}");
                println!("- insights: ordered rule-based insight strings");
                println!("- badges: achievement flags earned in the window");
            }
        }
    }

    Ok(())
}

fn cmd_doctor(records: Option<&Path>, json: bool) -> Result<(), VitalsCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "engine_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Vitals Insight version {ENGINE_VERSION}"),
    });

    checks.push(DoctorCheck {
        name: "report_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Report schema: {REPORT_VERSION}"),
    });

    if let Some(records_path) = records {
        if records_path.exists() {
            match fs::read_to_string(records_path) {
                Ok(content) => match RecordAdapter::parse_array(&content) {
                    Ok(parsed) => {
                        let issues = RecordAdapter::validate_series(&parsed);
                        if issues.is_empty() {
                            checks.push(DoctorCheck {
                                name: "records".to_string(),
                                status: CheckStatus::Ok,
                                message: format!("Records file valid ({} records)", parsed.len()),
                            });
                        } else {
                            checks.push(DoctorCheck {
                                name: "records".to_string(),
                                status: CheckStatus::Warning,
                                message: format!(
                                    "{} records with {} series issues",
                                    parsed.len(),
                                    issues.len()
                                ),
                            });
                        }
                    }
                    Err(e) => {
                        checks.push(DoctorCheck {
                            name: "records".to_string(),
                            status: CheckStatus::Error,
                            message: format!("Invalid records JSON: {e}"),
                        });
                    }
                },
                Err(e) => {
                    checks.push(DoctorCheck {
                        name: "records".to_string(),
                        status: CheckStatus::Error,
                        message: format!("Cannot read records file: {e}"),
                    });
                }
            }
        } else {
            checks.push(DoctorCheck {
                name: "records".to_string(),
                status: CheckStatus::Warning,
                message: "Records file does not exist".to_string(),
            });
        }
    }

    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (interactive mode)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (streaming input ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Vitals Doctor Report");
        println!("====================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(VitalsCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Helper functions

fn read_records(
    input: &Path,
    input_format: &InputFormat,
) -> Result<Vec<vitals_insight::DailyRecord>, VitalsCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let records = match input_format {
        InputFormat::Json => RecordAdapter::parse_array(&input_data)?,
        InputFormat::Ndjson => RecordAdapter::parse_ndjson(&input_data)?,
    };

    Ok(records)
}

fn records_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "vitals.daily_record.v1",
        "description": "One calendar day of wellness measurements",
        "type": "object",
        "required": ["date", "sleepHours", "steps", "heartRateBpm", "waterOz", "mood"],
        "properties": {
            "date": { "type": "string", "format": "date-time" },
            "sleepHours": { "type": "number" },
            "steps": { "type": "integer", "minimum": 0 },
            "heartRateBpm": { "type": "integer", "minimum": 0 },
            "waterOz": { "type": "number" },
            "mood": { "type": "number", "minimum": 1, "maximum": 10 }
        }
    })
    .to_string()
}

fn report_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "vitals.insight_report.v1",
        "description": "Aggregate insight report for a record series",
        "type": "object",
        "required": ["reportVersion", "producer", "generatedAtUtc", "window", "summary", "snapshot", "focus", "insights", "badges"],
        "properties": {
            "reportVersion": { "type": "string" },
            "producer": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "version": { "type": "string" },
                    "instance_id": { "type": "string" }
                }
            },
            "generatedAtUtc": { "type": "string", "format": "date-time" },
            "window": {
                "type": "object",
                "properties": {
                    "requestedDays": { "type": "integer" },
                    "recordCount": { "type": "integer" },
                    "startDate": { "type": "string" },
                    "endDate": { "type": "string" }
                }
            },
            "summary": { "type": "object" },
            "snapshot": { "type": "object" },
            "focus": {
                "type": "object",
                "properties": {
                    "category": { "type": "string" },
                    "title": { "type": "string" },
                    "recommendation": { "type": "string" }
                }
            },
            "insights": { "type": "array", "items": { "type": "string" } },
            "badges": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "kind": { "type": "string" },
                        "label": { "type": "string" }
                    }
                }
            }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum VitalsCliError {
    Io(io::Error),
    Engine(AnalyticsError),
    Json(serde_json::Error),
    NoRecords,
    ValidationFailed(usize),
    DoctorFailed,
}

impl From<io::Error> for VitalsCliError {
    fn from(e: io::Error) -> Self {
        VitalsCliError::Io(e)
    }
}

impl From<AnalyticsError> for VitalsCliError {
    fn from(e: AnalyticsError) -> Self {
        VitalsCliError::Engine(e)
    }
}

impl From<serde_json::Error> for VitalsCliError {
    fn from(e: serde_json::Error) -> Self {
        VitalsCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<VitalsCliError> for CliError {
    fn from(e: VitalsCliError) -> Self {
        match e {
            VitalsCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            VitalsCliError::Engine(e) => CliError {
                code: "ENGINE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure input matches vitals.daily_record.v1".to_string()),
            },
            VitalsCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            VitalsCliError::NoRecords => CliError {
                code: "NO_RECORDS".to_string(),
                message: "No records found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            VitalsCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{count} series issues found"),
                hint: Some("Fix the reported issues and retry".to_string()),
            },
            VitalsCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_records: usize,
    issue_count: usize,
    issues: Vec<SeriesIssue>,
}

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}
