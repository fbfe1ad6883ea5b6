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

//! parser for the file names of NLCD land cover rasters, which encode the release year, publication
//! date and (for retiled rasters) the tile indices:
//! ```text
//! nlcd_2019_land_cover_l48_20210604_05_09.tif   (tiled)
//! nlcd_2019_land_cover_l48_20210604.img         (untiled)
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{NLCD_ID, METADATA_BASE_URL};
use crate::errors::{Result, invalid_filename};

lazy_static! {
    static ref TILED_RE: Regex = Regex::new(r"(?i)^nlcd_(\d{4})_land_cover_l48_(\d{8})_(\d+)_(\d+)\.(?:tif|tiff|img)$").unwrap();
    static ref UNTILED_RE: Regex = Regex::new(r"(?i)^nlcd_(\d{4})_land_cover_l48_(\d{8})\.(?:tif|tiff|img)$").unwrap();
}

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct NlcdFileName {
    pub year: i32,
    /// publication date as given in the file name (yyyyMMdd)
    pub pub_date: String,
    /// tile indices as given in the file name (zero padding is preserved)
    pub tile: Option<(String,String)>,
}

impl NlcdFileName {

    /// parse the basename of `href`, which can be a local path or a URL
    pub fn parse (href: &str) -> Result<NlcdFileName> {
        let name = basename( href);

        if let Some(caps) = TILED_RE.captures( name) {
            Ok( NlcdFileName {
                year: parse_year( &caps[1], name)?,
                pub_date: caps[2].to_string(),
                tile: Some( (caps[3].to_string(), caps[4].to_string()) )
            })
        } else if let Some(caps) = UNTILED_RE.captures( name) {
            Ok( NlcdFileName {
                year: parse_year( &caps[1], name)?,
                pub_date: caps[2].to_string(),
                tile: None
            })
        } else {
            Err( invalid_filename( name))
        }
    }

    pub fn is_tiled (&self) -> bool {
        self.tile.is_some()
    }

    /// `USGS_NLCD-<year>[-<tile1>-<tile2>]`
    pub fn item_id (&self) -> String {
        format!("{}-{}{}", NLCD_ID, self.year, self.tile_suffix())
    }

    pub fn title (&self) -> String {
        format!("USGS-NLCD-{}-LANDCOVER{}", self.year, self.tile_suffix())
    }

    /// URL of the XML metadata sidecar for this release. This is derived and not checked for existence
    pub fn metadata_href (&self) -> String {
        format!("{}/nlcd_{}_land_cover_l48_{}.xml", METADATA_BASE_URL, self.year, self.pub_date)
    }

    fn tile_suffix (&self) -> String {
        match &self.tile {
            Some((t1,t2)) => format!("-{t1}-{t2}"),
            None => String::new()
        }
    }
}

fn basename (href: &str) -> &str {
    let href = if href.contains("://") { // strip URL query and fragment, local paths can contain '#'
        href.split(['?','#']).next().unwrap_or(href)
    } else {
        href
    };
    href.rsplit(['/','\\']).next().unwrap_or(href)
}

fn parse_year (s: &str, name: &str) -> Result<i32> {
    s.parse::<i32>().map_err( |_| invalid_filename( name))
}
