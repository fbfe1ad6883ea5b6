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

//! dataset wide constants of the USGS National Land Cover Database (NLCD, CONUS)
//! This is immutable data, i.e. it is not part of the (RON) configuration

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub const NLCD_ID: &str = "USGS_NLCD";

/// native SRS of all NLCD CONUS rasters (NAD83 / Conus Albers)
pub const NLCD_EPSG: u32 = 5070;

/// ground sample distance in meters
pub const SPATIAL_RES: f64 = 30.0;

pub const NODATA: u8 = 0;

pub const TITLE: &str = "USGS NLCD (CONUS) All Years";
pub const DESCRIPTION: &str = "The National Land Cover Database (NLCD) is an operational land cover monitoring program providing updated land cover and related information for the United States at five-year intervals.";
pub const KEYWORDS: &[&str] = &["Land Cover", "NLCD", "USGS", "CONUS"];

pub const LICENSE: &str = "proprietary";
pub const LICENSE_HREF: &str = "https://www.usgs.gov/information-policies-and-instructions/copyrights-and-credits";
pub const LICENSE_TITLE: &str = "Public Domain License - USGS";

pub const PROVIDER_NAME: &str = "United States Geological Survey";
pub const PROVIDER_ROLES: &[&str] = &["producer", "processor", "host"];
pub const PROVIDER_URL: &str = "https://www.mrlc.gov/data/nlcd-land-cover-conus-all-years";

pub const THUMBNAIL_HREF: &str = "https://www.mrlc.gov/sites/default/files/2019-04/Land_cover_L48_6.png";

/// base URL of the XML metadata sidecar files. The file name is `nlcd_<year>_land_cover_l48_<pubdate>.xml`
pub const METADATA_BASE_URL: &str = "https://www.mrlc.gov/downloads/sciweb1/shared/mrlc/metadata";

/// west, south, east, north in degrees
pub const SPATIAL_EXTENT: [f64;4] = [-130.2, 21.7, -63.7, 49.1];

/// first day covered by the oldest release
pub const FIRST_YEAR: i32 = 2001;

/// the NLCD land cover legend (pixel value -> class name), in ascending pixel value order.
/// Every item, asset definition and summary uses exactly this table
pub const CLASSIFICATION_VALUES: &[(u8, &str)] = &[
    (0, "no data"),
    (11, "Open Water"),
    (12, "Perennial Ice/Snow"),
    (21, "Developed, Open Space"),
    (22, "Developed, Low Intensity"),
    (23, "Developed, Medium Intensity"),
    (24, "Developed, High Intensity"),
    (31, "Barren Land(Rock/Sand/Clay)"),
    (41, "Deciduous Forest"),
    (42, "Evergreen Forest"),
    (43, "Mixed Forest"),
    (51, "Dwarf Scrub"),
    (52, "Shrub/Scrub"),
    (71, "GrassLand/Herbaceous"),
    (72, "Sedge/Herbaceous"),
    (73, "Lichens"),
    (74, "Moss"),
    (81, "Pasture/Hay"),
    (82, "Cultivated Crops"),
    (90, "Woody Wetlands"),
    (95, "Emergent Herbaceous Wetlands"),
];

/// NLCD release year -> (year,month,day) of the last day the release is representative for,
/// which is the day before the next release year starts
const VALIDITY_END: &[(i32, (i32,u32,u32))] = &[
    (2001, (2003,12,31)),
    (2004, (2005,12,31)),
    (2006, (2007,12,31)),
    (2008, (2010,12,31)),
    (2011, (2012,12,31)),
    (2013, (2015,12,31)),
    (2016, (2018,12,31)),
    (2019, (2020,12,31)),
];

pub fn release_years () -> impl Iterator<Item=i32> {
    VALIDITY_END.iter().map( |(year,_)| *year)
}

pub fn is_release_year (year: i32) -> bool {
    VALIDITY_END.iter().any( |(y,_)| *y == year)
}

/// Jan 1st 00:00:00Z of `year`
pub fn start_of_year (year: i32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms( year, 1, 1, 0, 0, 0).single()
}

/// the last second of the validity period of the `year` release, None if `year` is not a known release
pub fn validity_end (year: i32) -> Option<DateTime<Utc>> {
    VALIDITY_END.iter()
        .find( |(y,_)| *y == year)
        .and_then( |(_,(y,m,d))| NaiveDate::from_ymd_opt( *y, *m, *d))
        .and_then( |date| date.and_hms_opt( 23, 59, 59))
        .map( |dt| dt.and_utc())
}

/// the temporal extent of the whole collection
pub fn temporal_extent () -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let last_year = release_years().max().unwrap_or(FIRST_YEAR);
    (start_of_year( FIRST_YEAR), validity_end( last_year))
}
