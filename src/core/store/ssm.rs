//! AWS SSM Parameter Store backend.
//!
//! Credentials and region come from the standard SDK provider chain
//! (environment, shared config, instance metadata). The SDK is async;
//! this backend owns a current-thread Tokio runtime and drives each
//! request with `block_on`, keeping the rest of the tool synchronous.

use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::{self, ParameterType};
use tracing::trace;

use super::{Parameter, ParameterInfo, ParameterKind, ParameterStore, BULK_GET_LIMIT};
use crate::error::{Result, StoreError};

/// Parameter store client backed by AWS SSM.
pub struct SsmStore {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    /// Build a client from the default AWS configuration.
    pub fn connect() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let client = runtime.block_on(async {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            aws_sdk_ssm::Client::new(&config)
        });

        Ok(Self { runtime, client })
    }
}

impl ParameterStore for SsmStore {
    fn get(&self, name: &str) -> Result<Option<Parameter>> {
        trace!(name, "GetParameter");
        self.runtime.block_on(async {
            let result = self
                .client
                .get_parameter()
                .name(name)
                .with_decryption(true)
                .send()
                .await;

            match result {
                Ok(out) => Ok(out.parameter().and_then(convert_parameter)),
                Err(err) => {
                    let not_found = err
                        .as_service_error()
                        .map(|e| e.is_parameter_not_found())
                        .unwrap_or(false);
                    if not_found {
                        Ok(None)
                    } else {
                        Err(request_error("GetParameter", DisplayErrorContext(&err)).into())
                    }
                }
            }
        })
    }

    fn get_many(&self, names: &[String]) -> Result<Vec<Parameter>> {
        debug_assert!(names.len() <= BULK_GET_LIMIT);
        trace!(count = names.len(), "GetParameters");
        self.runtime.block_on(async {
            let out = self
                .client
                .get_parameters()
                .set_names(Some(names.to_vec()))
                .with_decryption(true)
                .send()
                .await
                .map_err(|err| request_error("GetParameters", DisplayErrorContext(&err)))?;

            // Names the store does not know land in invalid_parameters,
            // not in the result; callers treat absence as not-found.
            Ok(out
                .parameters()
                .iter()
                .filter_map(convert_parameter)
                .collect())
        })
    }

    fn get_by_path(&self, path: &str) -> Result<Vec<Parameter>> {
        trace!(path, "GetParametersByPath");
        self.runtime.block_on(async {
            let mut pages = self
                .client
                .get_parameters_by_path()
                .path(path)
                .recursive(true)
                .with_decryption(true)
                .into_paginator()
                .send();

            let mut parameters = Vec::new();
            while let Some(page) = pages.next().await {
                let page = page.map_err(|err| {
                    request_error("GetParametersByPath", DisplayErrorContext(&err))
                })?;
                for item in page.parameters() {
                    if let Some(p) = convert_parameter(item) {
                        parameters.push(p);
                    }
                }
            }
            Ok(parameters)
        })
    }

    fn put(&self, name: &str, value: &str, kind: ParameterKind, overwrite: bool) -> Result<()> {
        trace!(name, kind = kind.as_str(), overwrite, "PutParameter");
        self.runtime.block_on(async {
            let result = self
                .client
                .put_parameter()
                .name(name)
                .value(value)
                .r#type(to_sdk_kind(kind))
                .overwrite(overwrite)
                .send()
                .await;

            match result {
                Ok(_) => Ok(()),
                Err(err) => {
                    let exists = err
                        .as_service_error()
                        .map(|e| e.is_parameter_already_exists())
                        .unwrap_or(false);
                    if exists {
                        Err(StoreError::AlreadyExists(name.to_string()).into())
                    } else {
                        Err(request_error("PutParameter", DisplayErrorContext(&err)).into())
                    }
                }
            }
        })
    }

    fn delete(&self, name: &str) -> Result<()> {
        trace!(name, "DeleteParameter");
        self.runtime.block_on(async {
            let result = self.client.delete_parameter().name(name).send().await;

            match result {
                Ok(_) => Ok(()),
                Err(err) => {
                    let not_found = err
                        .as_service_error()
                        .map(|e| e.is_parameter_not_found())
                        .unwrap_or(false);
                    if not_found {
                        Err(StoreError::NotFound(name.to_string()).into())
                    } else {
                        Err(request_error("DeleteParameter", DisplayErrorContext(&err)).into())
                    }
                }
            }
        })
    }

    fn list(&self) -> Result<Vec<ParameterInfo>> {
        trace!("DescribeParameters");
        self.runtime.block_on(async {
            let mut pages = self
                .client
                .describe_parameters()
                .into_paginator()
                .send();

            let mut infos = Vec::new();
            while let Some(page) = pages.next().await {
                let page = page
                    .map_err(|err| request_error("DescribeParameters", DisplayErrorContext(&err)))?;
                for item in page.parameters() {
                    if let Some(name) = item.name() {
                        infos.push(ParameterInfo {
                            name: name.to_string(),
                            kind: item
                                .r#type()
                                .map(from_sdk_kind)
                                .unwrap_or(ParameterKind::SecureString),
                            key_id: item.key_id().map(str::to_string),
                        });
                    }
                }
            }
            Ok(infos)
        })
    }
}

fn request_error(operation: &str, detail: impl std::fmt::Display) -> StoreError {
    StoreError::Request(format!("{operation}: {detail}"))
}

fn convert_parameter(p: &types::Parameter) -> Option<Parameter> {
    Some(Parameter {
        name: p.name()?.to_string(),
        value: p.value()?.to_string(),
        kind: p
            .r#type()
            .map(from_sdk_kind)
            .unwrap_or(ParameterKind::SecureString),
    })
}

fn to_sdk_kind(kind: ParameterKind) -> ParameterType {
    match kind {
        ParameterKind::String => ParameterType::String,
        ParameterKind::StringList => ParameterType::StringList,
        ParameterKind::SecureString => ParameterType::SecureString,
    }
}

fn from_sdk_kind(kind: &ParameterType) -> ParameterKind {
    match kind {
        ParameterType::String => ParameterKind::String,
        ParameterType::StringList => ParameterKind::StringList,
        // Unknown variants are treated as secure so `exec --safe`
        // excludes them.
        _ => ParameterKind::SecureString,
    }
}
