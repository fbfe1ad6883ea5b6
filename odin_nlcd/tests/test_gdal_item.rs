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

use odin_gdal::{gdal::DriverManager, SpatialRef};
use odin_nlcd::{create_item, GdalInspector, Item, stac::LANDCOVER_KEY};

// run with "cargo test --test test_gdal_item -- --nocapture"
// this creates a small NLCD-like GeoTIFF and needs a GDAL installation with PROJ data

#[test]
fn test_item_from_geotiff() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nlcd_2019_land_cover_l48_20210604_05_09.tif");

    {
        let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
        let mut ds = driver.create_with_band_type::<u8,_>( &path, 200, 100, 1).unwrap();
        ds.set_geo_transform( &[ -2_000_000.0, 30.0, 0.0, 2_000_000.0, 0.0, -30.0 ]).unwrap();
        ds.set_spatial_ref( &SpatialRef::from_epsg(5070).unwrap()).unwrap();
    }

    let href = path.to_str().unwrap();
    let mut item = create_item( href, None, &GdalInspector).unwrap();
    println!("{}", serde_json::to_string_pretty( &item).unwrap());

    assert_eq!( item.id, "USGS_NLCD-2019-05-09");
    assert_eq!( item.properties.proj.as_ref().unwrap().epsg, 5070);
    assert_eq!( item.properties.proj.as_ref().unwrap().shape, Some( vec![100, 200]));
    assert!( item.properties.proj.as_ref().unwrap().wkt2.is_some());

    let [west,south,east,north] = [item.bbox[0], item.bbox[1], item.bbox[2], item.bbox[3]];
    assert!( west < east && south < north);
    assert!( west > -180.0 && east < 0.0 && south > 0.0 && north < 90.0);

    let landcover = &item.assets[LANDCOVER_KEY];
    assert_eq!( landcover.href, href);
    assert!( landcover.file.as_ref().unwrap().size.unwrap() > 0);

    item.validate().unwrap();
    let out = dir.path().join("item.json");
    item.save( &out).unwrap();
    assert_eq!( Item::from_file( &out).unwrap(), item);
}
