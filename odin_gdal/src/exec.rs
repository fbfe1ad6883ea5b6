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

//! synchronous execution of external GDAL command line utilities (gdal_translate, gdal_retile.py ..)
//! Output of the child process is captured so that callers can log it even if the process failed.

use std::{ffi::OsStr, path::Path, process::{Command, Output}};
use tracing::{debug,info};

use crate::errors::{Result, exec_error};

/// build a `gdal_translate` command that converts `input` into `output` using the given
/// output format, creation options (each passed as a separate `-co`) and an optional nodata value
pub fn translate_cmd<P> (program: &str, format: &str, create_opts: &[&str], nodata: Option<f64>, input: P, output: P) -> Command
    where P: AsRef<Path>
{
    let mut cmd = Command::new(program);
    cmd.arg("-of").arg(format);
    for co in create_opts {
        cmd.arg("-co").arg(co);
    }
    if let Some(nodata) = nodata {
        cmd.arg("-a_nodata").arg( nodata.to_string());
    }
    cmd.arg( input.as_ref().as_os_str());
    cmd.arg( output.as_ref().as_os_str());
    cmd
}

/// build a `gdal_retile.py` command that splits `input` into tiles of `tile_size` (width,height) pixels
/// which are stored in `target_dir`
pub fn retile_cmd<P> (program: &str, tile_size: (usize,usize), target_dir: P, input: P) -> Command
    where P: AsRef<Path>
{
    let mut cmd = Command::new(program);
    cmd
        .arg("-ps").arg( tile_size.0.to_string()).arg( tile_size.1.to_string())
        .arg("-targetDir").arg( target_dir.as_ref().as_os_str())
        .arg( input.as_ref().as_os_str());
    cmd
}

/// run `cmd` to completion and return its captured (stdout + stderr) output.
/// A non-zero exit status or a failure to start the process is reported as `OdinGdalError::ExecError`, which
/// also carries the captured output
pub fn exec_captured (cmd: &mut Command) -> Result<String> {
    debug!("executing {cmd:?}");
    let program = cmd.get_program().to_string_lossy().to_string();

    match cmd.output() {
        Ok(output) => {
            let text = captured_text( &output);
            info!("{} completed with status {}, output: {:?}", program, output.status, text);
            if output.status.success() {
                Ok(text)
            } else {
                Err( exec_error( program, Some(output.status), text))
            }
        }
        Err(e) => Err( exec_error( program, None, e))
    }
}

/// get the args of a command as lossy strings (mostly for logging and tests)
pub fn cmd_args (cmd: &Command) -> Vec<String> {
    cmd.get_args().map( |a: &OsStr| a.to_string_lossy().to_string()).collect()
}

fn captured_text (output: &Output) -> String {
    let mut text = String::from_utf8_lossy( &output.stdout).trim_end().to_string();
    let stderr = String::from_utf8_lossy( &output.stderr);
    let stderr = stderr.trim_end();
    if !stderr.is_empty() {
        if !text.is_empty() { text.push('\n') }
        text.push_str(stderr);
    }
    text
}
