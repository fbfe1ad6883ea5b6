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

use std::cell::RefCell;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use odin_gdal::RasterInfo;
use odin_nlcd::{
    create_item, prefix_modifier, Item, OdinNlcdError, RasterInspector, RasterSummary, Result,
    constants::{CLASSIFICATION_VALUES, NLCD_EPSG, release_years},
    model::{FILE_EXT, LABEL_EXT, PROJECTION_EXT, RASTER_EXT, media_type},
    stac::{LANDCOVER_KEY, METADATA_KEY},
};

// run with "cargo test --test test_item -- --nocapture"

const COG_HREF: &str = "https://data.example.com/nlcd/nlcd_2019_land_cover_l48_20210604_05_09.tif";

/// inspector that does not read anything but records the hrefs it was asked for
struct StubInspector {
    epsg: Option<u32>,
    size: Option<u64>,
    hrefs: RefCell<Vec<String>>,
}

impl StubInspector {
    fn new (epsg: Option<u32>, size: Option<u64>) -> Self {
        StubInspector { epsg, size, hrefs: RefCell::new( Vec::new()) }
    }
}

impl RasterInspector for StubInspector {
    fn inspect (&self, href: &str) -> Result<RasterSummary> {
        self.hrefs.borrow_mut().push( href.to_string());
        let info = RasterInfo {
            bounds: [-2000000.0, 1985000.0, -1970000.0, 2000000.0],
            geo_transform: [-2000000.0, 30.0, 0.0, 2000000.0, 0.0, -30.0],
            width: 1000,
            height: 500,
            epsg: self.epsg,
            wkt: None,
            wkt2: Some( "PROJCRS[\"NAD83 / Conus Albers\"]".to_string()),
        };
        Ok( RasterSummary { info, geo_bounds: [-120.5, 30.25, -119.75, 30.75] })
    }

    fn file_size (&self, href: &str) -> Option<u64> {
        self.size
    }
}

fn landcover_json (item: &Item) -> Value {
    item.to_value().unwrap()["assets"][LANDCOVER_KEY].clone()
}

#[test]
fn test_release_years() {
    let inspector = StubInspector::new( Some(NLCD_EPSG), Some(1024));
    for year in release_years() {
        let href = format!("nlcd_{year}_land_cover_l48_20210604.tif");
        let item = create_item( &href, None, &inspector).unwrap();
        assert_eq!( item.id, format!("USGS_NLCD-{year}"));
        assert!( item.properties.start_datetime.unwrap() < item.properties.end_datetime.unwrap());
    }
}

#[test]
fn test_unknown_year() {
    let inspector = StubInspector::new( Some(NLCD_EPSG), None);
    match create_item( "nlcd_2020_land_cover_l48_20210604.tif", None, &inspector) {
        Err(OdinNlcdError::UnknownYear(2020)) => {}
        other => panic!("expected unknown year error, got {other:?}")
    }
    assert!( inspector.hrefs.borrow().is_empty()); // year is checked before the raster is opened

    assert!( matches!( create_item( "landcover.tif", None, &inspector), Err(OdinNlcdError::FilenameError(_))));
}

#[test]
fn test_item_fields() {
    let inspector = StubInspector::new( Some(NLCD_EPSG), Some(123456));
    let item = create_item( COG_HREF, None, &inspector).unwrap();
    let json = item.to_value().unwrap();
    println!("{}", serde_json::to_string_pretty( &json).unwrap());

    assert_eq!( json["type"], "Feature");
    assert_eq!( json["stac_version"], "1.0.0");
    assert_eq!( item.id, "USGS_NLCD-2019-05-09");
    for ext in [PROJECTION_EXT, LABEL_EXT, FILE_EXT, RASTER_EXT] {
        assert!( item.stac_extensions.iter().any( |e| e == ext));
    }

    assert_eq!( item.bbox, vec![-120.5, 30.25, -119.75, 30.75]);
    assert_eq!( json["geometry"]["type"], "Polygon");

    let props = &json["properties"];
    assert_eq!( props["title"], "USGS-NLCD-2019-LANDCOVER-05-09");
    assert!( props["datetime"].is_null());
    assert_eq!( item.properties.start_datetime, Some( Utc.with_ymd_and_hms( 2019, 1, 1, 0, 0, 0).unwrap()));
    assert_eq!( item.properties.end_datetime, Some( Utc.with_ymd_and_hms( 2020, 12, 31, 23, 59, 59).unwrap()));
    assert_eq!( props["proj:epsg"], 5070);
    assert_eq!( props["proj:shape"], json!([500, 1000]));
    assert_eq!( props["proj:transform"], json!([30.0, 0.0, -2000000.0, 0.0, -30.0, 2000000.0]));
    assert_eq!( props["proj:bbox"], json!([-2000000.0, 1985000.0, -1970000.0, 2000000.0]));
    assert_eq!( props["label:type"], "raster");
    assert_eq!( props["label:tasks"], json!(["classification"]));
    assert!( props["label:properties"].is_null());

    let landcover = &json["assets"][LANDCOVER_KEY];
    assert_eq!( landcover["href"], COG_HREF);
    assert_eq!( landcover["type"], media_type::COG);
    assert_eq!( landcover["roles"], json!(["data", "labels", "labels-raster"]));
    assert_eq!( landcover["proj:epsg"], 5070);
    assert_eq!( landcover["file:size"], 123456);
    assert_eq!( landcover["raster:bands"][0]["nodata"], 0.0);
    assert_eq!( landcover["raster:bands"][0]["data_type"], "uint8");
    assert_eq!( landcover["raster:bands"][0]["sampling"], "area");
    assert_eq!( landcover["raster:bands"][0]["spatial_resolution"], 30.0);

    let metadata = &json["assets"][METADATA_KEY];
    assert_eq!( metadata["type"], media_type::XML);
    assert_eq!( metadata["roles"], json!(["metadata"]));
    assert!( metadata["href"].as_str().unwrap().ends_with("nlcd_2019_land_cover_l48_20210604.xml"));
    assert!( metadata.get("file:values").is_none());

    item.validate().unwrap();
}

#[test]
fn test_legend_consistency() {
    let inspector = StubInspector::new( Some(NLCD_EPSG), None);
    let item = create_item( COG_HREF, None, &inspector).unwrap();
    let json = item.to_value().unwrap();

    let values = json["assets"][LANDCOVER_KEY]["file:values"].as_array().unwrap();
    let classes = json["properties"]["label:classes"][0]["classes"].as_array().unwrap();
    assert_eq!( values.len(), CLASSIFICATION_VALUES.len());
    assert_eq!( classes.len(), CLASSIFICATION_VALUES.len());

    for (i, (value,label)) in CLASSIFICATION_VALUES.iter().enumerate() {
        assert_eq!( values[i]["values"], json!([value]));
        assert_eq!( values[i]["summary"], *label);
        assert_eq!( classes[i], *label);
    }
}

#[test]
fn test_read_href_modifier() {
    let inspector = StubInspector::new( Some(NLCD_EPSG), None);
    let modifier = prefix_modifier("/vsicurl/");
    let item = create_item( COG_HREF, Some( &*modifier), &inspector).unwrap();

    assert_eq!( inspector.hrefs.borrow().as_slice(), &[format!("/vsicurl/{COG_HREF}")]);
    assert_eq!( item.assets[LANDCOVER_KEY].href, COG_HREF); // metadata records the unmodified href
}

#[test]
fn test_missing_size_and_epsg() {
    let inspector = StubInspector::new( None, None);
    let item = create_item( COG_HREF, None, &inspector).unwrap();
    let landcover = landcover_json( &item);

    assert!( landcover.get("file:size").is_none());
    assert!( landcover.get("file:values").is_some());
    assert_eq!( landcover["proj:epsg"], NLCD_EPSG);
    item.validate().unwrap();
}

#[test]
fn test_item_roundtrip() {
    let inspector = StubInspector::new( Some(NLCD_EPSG), Some(42));
    let mut item = create_item( COG_HREF, None, &inspector).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items").join("nlcd-2019-05-09.json");
    item.save( &path).unwrap();

    let self_link = item.links.iter().find( |l| l.rel == "self").unwrap();
    assert!( self_link.href.ends_with("nlcd-2019-05-09.json"));

    let loaded = Item::from_file( &path).unwrap();
    assert_eq!( loaded, item);
    loaded.validate().unwrap();
}
