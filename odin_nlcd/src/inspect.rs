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

//! access to the raster attributes that go into NLCD items. The `RasterInspector` trait is the seam
//! between item assembly and GDAL, which allows to create items from other sources (e.g. in tests)

use odin_gdal::{RasterInfo, vsi_path};
use tracing::debug;

use crate::constants::NLCD_EPSG;
use crate::errors::Result;

/// caller supplied rewrite of an href before it is read (e.g. to add a VSI prefix or credentials).
/// The unmodified href is what ends up in the generated metadata
pub type ReadHrefModifier<'a> = &'a dyn Fn(&str)->String;

/// create a read href modifier that prepends `prefix` (e.g. "/vsicurl/")
pub fn prefix_modifier (prefix: &str) -> Box<dyn Fn(&str)->String> {
    let prefix = prefix.to_string();
    Box::new( move |href: &str| format!("{prefix}{href}"))
}

pub fn read_href (href: &str, modifier: Option<ReadHrefModifier>) -> String {
    match modifier {
        Some(f) => f(href),
        None => href.to_string()
    }
}

/// raster header attributes plus the bounds reprojected to EPSG:4326
#[derive(Debug,Clone,PartialEq)]
pub struct RasterSummary {
    pub info: RasterInfo,
    /// west, south, east, north in degrees
    pub geo_bounds: [f64;4],
}

pub trait RasterInspector {
    fn inspect (&self, href: &str) -> Result<RasterSummary>;

    /// byte length of the raster file, None if it can't be determined
    fn file_size (&self, href: &str) -> Option<u64>;
}

/// the production inspector that reads rasters through GDAL
pub struct GdalInspector;

impl RasterInspector for GdalInspector {
    fn inspect (&self, href: &str) -> Result<RasterSummary> {
        let path = vsi_path( href);
        debug!("inspecting raster {path}");

        let info = RasterInfo::read( &path)?; // dataset is already closed at this point
        let geo_bounds = info.geographic_bounds( NLCD_EPSG)?;
        Ok( RasterSummary { info, geo_bounds } )
    }

    fn file_size (&self, href: &str) -> Option<u64> {
        odin_gdal::file_size( &vsi_path( href))
    }
}
