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

//! GDAL glue for ODIN crates that need to inspect raster files or run GDAL command line utilities.
//! Datasets opened by this crate are read-only and only live for the duration of the respective call.

pub mod errors;
pub mod exec;

use std::{ffi::{CStr, CString}, path::Path, ptr::null_mut};
use libc::{c_char, c_void};

// we re-export these so that other crates don't have to use a direct gdal depedency to import.
pub use gdal::{self, Dataset, GeoTransform, GeoTransformEx, errors::GdalError, cpl::CslStringList};
pub use gdal::spatial_ref::{CoordTransform, CoordTransformOptions, SpatialRef};

use gdal_sys::{self, OGRErr, OSRExportToWktEx};
use tracing::{debug,warn};

use crate::errors::{Result, misc_error, gdal_error, OdinGdalError};

pub fn pc_char_to_string (pc_char: *const c_char) -> String {
    let cstr = unsafe { CStr::from_ptr(pc_char) };
    String::from_utf8_lossy(cstr.to_bytes()).to_string()
}

pub fn to_csl_string_list (strings: &[&str]) -> Result<Option<CslStringList>> {
    if ! strings.is_empty() { // don't allocate if there is nothing to convert
        let mut co_list =  CslStringList::new();
        for s in strings {
            co_list.add_string(s)?;
        }
        Ok(Some(co_list))
    } else {
        Ok(None)
    }
}

/* #region raster inspection ****************************************************************************************/

/// the header attributes of a raster dataset that are needed to describe it (e.g. in catalog metadata)
#[derive(Debug,Clone,PartialEq)]
pub struct RasterInfo {
    /// x_min, y_min, x_max, y_max in the native SRS of the dataset
    pub bounds: [f64;4],
    pub geo_transform: GeoTransform,
    pub width: usize,
    pub height: usize,
    /// EPSG code of the native SRS, if it has one
    pub epsg: Option<u32>,
    pub wkt: Option<String>,
    pub wkt2: Option<String>,
}

impl RasterInfo {
    /// open the dataset at `path` read-only and collect its header attributes.
    /// The dataset is closed before this function returns
    pub fn read<P: AsRef<Path>> (path: P) -> Result<RasterInfo> {
        let ds = Dataset::open( path.as_ref())?;
        Self::from_dataset( &ds)
    }

    pub fn from_dataset (ds: &Dataset) -> Result<RasterInfo> {
        let (width,height) = ds.raster_size();
        let geo_transform = ds.geo_transform()?;
        let bounds = bounds_from_geotransform( &geo_transform, width, height);

        let (epsg, wkt, wkt2) = match ds.spatial_ref() {
            Ok(srs) => {
                let epsg = srs.auth_code().ok().and_then( |c| u32::try_from(c).ok());
                (epsg, srs.to_wkt().ok(), srs_to_wkt2( &srs).ok())
            }
            Err(e) => {
                debug!("dataset has no spatial reference: {e}");
                (None, None, None)
            }
        };

        Ok( RasterInfo { bounds, geo_transform, width, height, epsg, wkt, wkt2 } )
    }

    /// (rows,cols) - the order used by most raster metadata formats
    pub fn shape (&self) -> [usize;2] {
        [self.height, self.width]
    }

    pub fn affine_transform (&self) -> [f64;6] {
        affine_from_geotransform( &self.geo_transform)
    }

    /// the native SRS of the dataset, or the SRS for `default_epsg` if the dataset does not have one
    pub fn spatial_ref (&self, default_epsg: u32) -> Result<SpatialRef> {
        if let Some(wkt) = &self.wkt {
            Ok( SpatialRef::from_wkt( wkt)?)
        } else {
            warn!("no SRS in dataset, assuming EPSG:{default_epsg}");
            srs_epsg( default_epsg)
        }
    }

    /// bounds in EPSG:4326 as (west,south,east,north) degrees
    pub fn geographic_bounds (&self, default_epsg: u32) -> Result<[f64;4]> {
        let s_srs = self.spatial_ref( default_epsg)?;
        let t_srs = srs_epsg_4326()?;
        let [x_min,y_min,x_max,y_max] = self.bounds;
        let (west,south,east,north) = transform_bounds_2d( &s_srs, &t_srs, x_min, y_min, x_max, y_max, None)?;
        Ok([west,south,east,north])
    }
}

/// compute the native bounds of a raster from its geo-transform, taking rotation terms into account
pub fn bounds_from_geotransform (gt: &GeoTransform, width: usize, height: usize) -> [f64;4] {
    let w = width as f64;
    let h = height as f64;
    let corners = [ gt.apply( 0.0, 0.0), gt.apply( w, 0.0), gt.apply( 0.0, h), gt.apply( w, h) ];

    let mut bounds = [f64::MAX, f64::MAX, f64::MIN, f64::MIN];
    for (x,y) in corners {
        bounds[0] = bounds[0].min(x);
        bounds[1] = bounds[1].min(y);
        bounds[2] = bounds[2].max(x);
        bounds[3] = bounds[3].max(y);
    }
    bounds
}

/// turn a GDAL geo-transform `[x0, dx, rx, y0, ry, dy]` into the row-major affine coefficients
/// `[a, b, c, d, e, f]` with `x = a*col + b*row + c` and `y = d*col + e*row + f`
pub fn affine_from_geotransform (gt: &GeoTransform) -> [f64;6] {
    [gt[1], gt[2], gt[0], gt[4], gt[5], gt[3]]
}

/// check if any band of the dataset at `path` contains a non-zero pixel value.
/// Bands are read line by line as f64, i.e. this does not load the whole raster into memory and signed or
/// fractional values of non-Byte bands are not clamped or rounded to zero. NaN counts as data
pub fn has_data<P: AsRef<Path>> (path: P) -> Result<bool> {
    let ds = Dataset::open( path.as_ref())?;

    for band_index in 1..=ds.raster_count() {
        let band = ds.rasterband( band_index)?;
        let (x_size, y_size) = band.size();
        let mut scan_line: Vec<f64> = vec![0.0; x_size];

        for row in 0..y_size {
            band.read_into_slice( (0, row as isize), (x_size,1), (x_size,1), &mut scan_line, None)?;
            if scan_line.iter().any( |v| *v != 0.0) { return Ok(true) }
        }
    }
    Ok(false)
}

/// byte length of the file at `path`. This works for local files and for GDAL virtual file system
/// paths such as `/vsicurl/..` or `/vsis3/..`. Returns None if the size can't be determined
pub fn file_size (path: &str) -> Option<u64> {
    if let Ok(meta) = std::fs::metadata( path) {
        return Some( meta.len())
    }

    if path.starts_with("/vsi") {
        let c_path = CString::new( path).ok()?;
        let mut stat: gdal_sys::VSIStatBufL = unsafe { std::mem::zeroed() };
        let rc = unsafe { gdal_sys::VSIStatL( c_path.as_ptr(), &mut stat) };
        if rc == 0 { return Some( stat.st_size as u64) }
    }

    None
}

/// map URLs to the GDAL virtual file system prefix that can read them (http(s) -> `/vsicurl/`, s3 -> `/vsis3/`,
/// gs -> `/vsigs/`). Other paths are returned unchanged
pub fn vsi_path (href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        format!("/vsicurl/{href}")
    } else if let Some(rest) = href.strip_prefix("s3://") {
        format!("/vsis3/{rest}")
    } else if let Some(rest) = href.strip_prefix("gs://") {
        format!("/vsigs/{rest}")
    } else {
        href.to_string()
    }
}

/* #endregion raster inspection */

/* #region SpatialRef based coordinate transformations **************************************************************/

pub fn transform_bounds_2d (s_srs: &SpatialRef, t_srs: &SpatialRef,
                            x_min: f64, y_min: f64,
                            x_max: f64, y_max: f64,
                            opt_densify_pts: Option<i32>) -> Result<(f64,f64,f64,f64)> {

    let s_is_geo = s_srs.is_geographic();
    let t_is_geo = t_srs.is_geographic();

    // geographic SRS use lat/lon axis order
    let bounds: [f64;4] = if s_is_geo && !t_is_geo { [y_min,x_min,y_max,x_max] } else { [x_min,y_min,x_max,y_max] };
    let densify_pts: i32 = if let Some(dp) = opt_densify_pts { dp } else { 21 }; // default recommended by GDAL OCTTransformBounds doc

    let mut ct_options = CoordTransformOptions::new()?;
    ct_options.desired_accuracy( 0.0);
    ct_options.set_ballpark_allowed(false);

    CoordTransform::new_with_options(s_srs,t_srs, &ct_options)
        .and_then( |transform| transform.transform_bounds(&bounds, densify_pts))
        .map_err( gdal_error)
        .map( |a| {
            if t_is_geo && !s_is_geo { (a[1], a[0], a[3], a[2]) } else { (a[0], a[1], a[2], a[3]) }
        })
}

/// export SRS as WKT2 (2019) string
pub fn srs_to_wkt2 (srs: &SpatialRef) -> Result<String> {
    let opts = to_csl_string_list( &["FORMAT=WKT2_2019"])?.ok_or( misc_error("no WKT2 export options"))?;
    let mut c_wkt: *mut c_char = null_mut();

    let rv = unsafe { OSRExportToWktEx( srs.to_c_hsrs(), &mut c_wkt, opts.as_ptr() as *const *const c_char) };
    let res = if rv != OGRErr::OGRERR_NONE || c_wkt.is_null() {
        Err( misc_error( format!("WKT2 export failed with OGR error {rv}")))
    } else {
        Ok( pc_char_to_string( c_wkt))
    };

    unsafe { gdal_sys::VSIFree( c_wkt as *mut c_void) };
    res
}

/* #endregion SpatialRef based coordinate transformations */

/* #region well known SpatialRefs *********************************************************************************/

pub fn srs_epsg_4326 () -> Result<SpatialRef> { srs_epsg(4326) }

pub fn srs_epsg (epsg: u32) -> Result<SpatialRef> {
    Ok(SpatialRef::from_epsg(epsg)?)
}

/* #endregion well known SpatialRefs */
