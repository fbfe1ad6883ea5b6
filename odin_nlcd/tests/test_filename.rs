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

use odin_nlcd::{NlcdFileName, OdinNlcdError};

// run with "cargo test --test test_filename -- --nocapture"

#[test]
fn test_tiled_name() {
    let fname = NlcdFileName::parse("https://host/nlcd/nlcd_2019_land_cover_l48_20210604_05_09.tif").unwrap();
    println!("{fname:?}");

    assert_eq!( fname.year, 2019);
    assert_eq!( fname.pub_date, "20210604");
    assert!( fname.is_tiled());
    assert_eq!( fname.item_id(), "USGS_NLCD-2019-05-09");
    assert_eq!( fname.title(), "USGS-NLCD-2019-LANDCOVER-05-09");
    assert!( fname.metadata_href().ends_with("/nlcd_2019_land_cover_l48_20210604.xml"));
}

#[test]
fn test_untiled_name() {
    let fname = NlcdFileName::parse("/data/nlcd_2011_land_cover_l48_20210604.img").unwrap();
    assert_eq!( fname.year, 2011);
    assert!( !fname.is_tiled());
    assert_eq!( fname.item_id(), "USGS_NLCD-2011");
    assert_eq!( fname.title(), "USGS-NLCD-2011-LANDCOVER");

    let fname = NlcdFileName::parse("NLCD_2001_Land_Cover_L48_20190424.TIF").unwrap();
    assert_eq!( fname.item_id(), "USGS_NLCD-2001");
}

#[test]
fn test_invalid_names() {
    for href in [
        "landcover.tif",
        "nlcd_2019_land_cover_l48.tif",
        "nlcd_2019_land_cover_ak_20210604.tif",
        "nlcd_2019_land_cover_l48_20210604.png",
        "nlcd_2019_land_cover_l48_20210604/other.tif",
        "",
    ] {
        match NlcdFileName::parse( href) {
            Err(OdinNlcdError::FilenameError(_)) => {}
            other => panic!("expected filename error for {href:?}, got {other:?}")
        }
    }
}
