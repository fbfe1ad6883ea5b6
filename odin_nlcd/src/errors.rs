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
use thiserror::Error;
use odin_gdal::errors::OdinGdalError;

pub type Result<T> = std::result::Result<T, OdinNlcdError>;

#[derive(Error,Debug)]
pub enum OdinNlcdError {

    #[error("not a NLCD land cover filename: {0}")]
    FilenameError(String),

    #[error("no NLCD release for year {0}")]
    UnknownYear(i32),

    #[error("output directory error: {0}")]
    OutputDirError(String),

    #[error("invalid STAC object: {0}")]
    ValidationError(String),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("JSON error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    // pass through for OdinGdalErrors
    #[error("ODIN gdal error {0}")]
    GdalError( #[from] OdinGdalError),

    // generic self-created error
    #[error("NLCD operation failed: {0}")]
    OpFailedError(String),
}

pub fn op_failed<S: ToString> (msg: S)->OdinNlcdError {
    OdinNlcdError::OpFailedError(msg.to_string())
}

pub fn invalid_filename<S: ToString> (fname: S)->OdinNlcdError {
    OdinNlcdError::FilenameError(fname.to_string())
}

pub fn validation_error<S: ToString> (msg: S)->OdinNlcdError {
    OdinNlcdError::ValidationError(msg.to_string())
}

pub fn output_dir_error<S: ToString> (msg: S)->OdinNlcdError {
    OdinNlcdError::OutputDirError(msg.to_string())
}
