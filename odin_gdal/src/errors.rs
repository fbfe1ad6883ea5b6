/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
use std::process::ExitStatus;
use thiserror::Error;
use gdal::errors::GdalError;

pub type Result<T> = std::result::Result<T, OdinGdalError>;

#[derive(Error,Debug)]
pub enum OdinGdalError {

    #[error("GDAL error {0}")]
    GdalError( #[from] GdalError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    /// an external GDAL utility could not be started or returned a non-zero exit status.
    /// `output` is whatever the process wrote to stdout/stderr before it terminated
    #[error("{program} failed ({status}): {output}")]
    ExecError { program: String, status: String, output: String },

    // generic self-created error
    #[error("operation failed {0}")]
    MiscError(String),
}

pub fn misc_error<S: ToString> (msg: S)->OdinGdalError {
    OdinGdalError::MiscError(msg.to_string())
}

pub fn gdal_error (e: GdalError)->OdinGdalError {
    OdinGdalError::GdalError(e)
}

pub fn exec_error (program: impl ToString, status: Option<ExitStatus>, output: impl ToString)->OdinGdalError {
    let status = match status {
        Some(status) => status.to_string(),
        None => "not started".to_string()
    };
    OdinGdalError::ExecError { program: program.to_string(), status, output: output.to_string() }
}
