use anyhow::Error;
use std::process::ExitCode;
use workbench_config::ConfigError;
use workbench_core::time::TimeParseError;
use workbench_core::CoreError;
use workbench_ingest::IngestError;
use workbench_store::error::{StoreError, StoreErrorKind};

use crate::service::ServiceError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(service_err) = cause.downcast_ref::<ServiceError>() {
            return ExitCode::from(service_exit_code(service_err));
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if cause.downcast_ref::<IngestError>().is_some()
            || cause.downcast_ref::<CoreError>().is_some()
            || cause.downcast_ref::<TimeParseError>().is_some()
        {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn service_exit_code(err: &ServiceError) -> u8 {
    match err {
        ServiceError::Ingest(_) | ServiceError::Core(_) => EXIT_INVALID_INPUT,
        ServiceError::Store(store_err) => store_exit_code(store_err),
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidRecord
        | StoreErrorKind::Constraint
        | StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::Io
        | StoreErrorKind::Sql
        | StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::InvalidData => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidHost
        | ConfigError::InvalidPort(_)
        | ConfigError::InvalidMaxUploadBytes(_)
        | ConfigError::InvalidDatabasePath
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
