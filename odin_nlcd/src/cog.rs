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

//! creation of NLCD Cloud-Optimized GeoTIFFs through external GDAL utilities.
//! The conversion itself is done by `gdal_translate` (using all CPUs), we only assemble the fixed option set
//! and report failures

use std::{fs, path::{Path, PathBuf}};
use tracing::{error,info};

use odin_gdal::exec::{exec_captured, retile_cmd, translate_cmd};

use crate::NlcdConfig;
use crate::constants::NODATA;
use crate::errors::{OdinNlcdError, Result, op_failed, output_dir_error};

/// the fixed COG creation options
pub const COG_CREATE_OPTS: &[&str] = &[
    "NUM_THREADS=ALL_CPUS",
    "BLOCKSIZE=512",
    "COMPRESS=DEFLATE",
    "LEVEL=9",
    "PREDICTOR=YES",
    "OVERVIEWS=IGNORE_EXISTING",
];

#[derive(Debug,Clone,Copy)]
pub struct CogOptions {
    /// return errors to the caller. If false, failures are only logged (batch processing)
    pub raise_on_fail: bool,
    /// only log what would be done, don't run any process or write any file
    pub dry_run: bool,
}

impl Default for CogOptions {
    fn default() -> Self {
        CogOptions { raise_on_fail: true, dry_run: false }
    }
}

/// convert the GeoTIFF at `input` into a COG at `output`. Returns the output path
pub fn create_cog (input: impl AsRef<Path>, output: impl AsRef<Path>, opts: CogOptions, config: &NlcdConfig) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = output.as_ref();

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() { check_output_dir( dir)? }
    }

    if opts.dry_run {
        info!("dry run: would have read {:?}, created COG and written it to {:?}", input, output);
        return Ok( output.to_path_buf())
    }

    let mut cmd = translate_cmd( &config.gdal_translate, "COG", COG_CREATE_OPTS, Some(NODATA as f64), input, output);
    handle_failure( exec_captured( &mut cmd).map(|_| ()).map_err( OdinNlcdError::from), output, opts)?;

    Ok( output.to_path_buf())
}

/// split the GeoTIFF at `input` into tiles of `config.tile_size` pixels and convert each tile that contains
/// data into a COG within `output_dir`. Tiles keep the names given to them by gdal_retile, i.e. `<input-stem>_<row>_<col>.tif`.
/// Returns the paths of the created COGs. If `opts.raise_on_fail` is false, failed tiles are logged and skipped
pub fn create_retiled_cogs (input: impl AsRef<Path>, output_dir: impl AsRef<Path>, opts: CogOptions, config: &NlcdConfig) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();
    check_output_dir( output_dir)?;

    if opts.dry_run {
        info!("dry run: would have split {:?} into tiles, created COGs and written them to {:?}", input, output_dir);
        return Ok( Vec::new())
    }

    let res = retile( input, output_dir, opts, config);
    handle_failure( res, input, opts).map( |cogs| cogs.unwrap_or_default())
}

fn retile (input: &Path, output_dir: &Path, opts: CogOptions, config: &NlcdConfig) -> Result<Vec<PathBuf>> {
    let tmp_dir = tempfile::tempdir()?; // removed when dropped

    let mut cmd = retile_cmd( &config.gdal_retile, config.tile_size, tmp_dir.path(), input);
    exec_captured( &mut cmd)?;

    // tile failures are handled here so that we only report COGs that were actually written
    let tile_opts = CogOptions { raise_on_fail: true, ..opts };
    let mut cogs: Vec<PathBuf> = Vec::new();

    for tile in tile_files( tmp_dir.path())? {
        match convert_tile( &tile, output_dir, tile_opts, config) {
            Ok(Some(cog)) => cogs.push( cog),
            Ok(None) => info!("skipping empty tile {:?}", tile),
            Err(e) => {
                if opts.raise_on_fail { return Err(e) }
                error!("failed to convert tile {:?}: {}", tile, e);
            }
        }
    }

    Ok(cogs)
}

/// create a COG for `tile` in `output_dir` if the tile has data. Returns None for empty tiles
fn convert_tile (tile: &Path, output_dir: &Path, opts: CogOptions, config: &NlcdConfig) -> Result<Option<PathBuf>> {
    if !odin_gdal::has_data( tile)? {
        return Ok(None)
    }
    let fname = tile.file_name().ok_or( op_failed( format!("tile without file name {:?}", tile)))?;
    create_cog( tile, output_dir.join( fname), opts, config).map( Some)
}

fn tile_files (dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.tif");
    let pattern = pattern.to_str().ok_or( op_failed( format!("non UTF-8 tile directory {:?}", dir)))?;
    let paths = glob::glob( pattern).map_err( |e| op_failed( e))?;

    let mut tiles: Vec<PathBuf> = paths.filter_map( |p| p.ok()).collect();
    tiles.sort();
    Ok(tiles)
}

/// log failures and either pass them on or turn them into `None` if the caller does not want to fail
fn handle_failure<T> (res: Result<T>, path: &Path, opts: CogOptions) -> Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            error!("failed to process {:?}: {}", path, e);
            if opts.raise_on_fail { Err(e) } else { Ok(None) }
        }
    }
}

/// the output directory has to exist and be writable before we start any work
pub fn check_output_dir (dir: &Path) -> Result<()> {
    let meta = fs::metadata( dir).map_err( |e| output_dir_error( format!("{:?}: {}", dir, e)))?;
    if !meta.is_dir() {
        return Err( output_dir_error( format!("{:?} is not a directory", dir)))
    }
    if meta.permissions().readonly() {
        return Err( output_dir_error( format!("{:?} is not writable", dir)))
    }
    Ok(())
}
