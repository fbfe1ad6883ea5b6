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
#![allow(unused)]

//! STAC metadata for the USGS National Land Cover Database (NLCD).
//!
//! This crate creates STAC Items for NLCD land cover COGs (using the projection, label, file and raster
//! extensions), the static NLCD STAC Collection, and optionally the COGs themselves by means of the GDAL
//! command line utilities. See the `usgs_nlcd` binary for the command line interface.

use std::path::Path;
use serde::{Deserialize, Serialize};

pub mod constants;
pub mod errors;
pub mod filename;
pub mod model;
pub mod validate;
pub mod inspect;
pub mod stac;
pub mod cog;

pub use errors::{OdinNlcdError, Result};
pub use filename::NlcdFileName;
pub use model::{Item, Collection, Asset};
pub use inspect::{RasterInspector, RasterSummary, GdalInspector, ReadHrefModifier, prefix_modifier};
pub use stac::{create_item, create_collection};
pub use cog::{create_cog, create_retiled_cogs, CogOptions};

/// configuration of the external tools we use. Dataset properties are in `constants`
#[derive(Clone,Serialize,Deserialize,Debug,PartialEq)]
#[serde(default)]
pub struct NlcdConfig {
    /// pathname of the gdal_translate executable
    pub gdal_translate: String,

    /// pathname of the gdal_retile.py script
    pub gdal_retile: String,

    /// (width,height) in pixels of tiles created by `create_retiled_cogs`
    pub tile_size: (usize,usize),
}

impl Default for NlcdConfig {
    fn default() -> Self {
        NlcdConfig {
            gdal_translate: "gdal_translate".to_string(),
            gdal_retile: "gdal_retile.py".to_string(),
            tile_size: (10000, 10000),
        }
    }
}

pub fn load_config_path<P: AsRef<Path>> (path: P) -> Result<NlcdConfig> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
