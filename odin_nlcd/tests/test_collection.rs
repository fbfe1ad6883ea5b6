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

use chrono::{TimeZone, Utc};
use serde_json::json;

use odin_nlcd::{
    create_collection, Collection,
    constants::{CLASSIFICATION_VALUES, NLCD_EPSG, SPATIAL_EXTENT},
    model::ITEM_ASSETS_EXT,
    stac::{file_values, label_classes, LANDCOVER_KEY, METADATA_KEY, THUMBNAIL_KEY},
};

// run with "cargo test --test test_collection -- --nocapture"

#[test]
fn test_collection_fields() {
    let collection = create_collection();
    let json = collection.to_value().unwrap();
    println!("{}", serde_json::to_string_pretty( &json).unwrap());

    assert_eq!( json["type"], "Collection");
    assert_eq!( collection.id, "USGS_NLCD");
    assert_eq!( collection.license, "proprietary");
    assert!( collection.stac_extensions.iter().any( |e| e == ITEM_ASSETS_EXT));
    assert!( collection.links.iter().any( |l| l.rel == "license"));
    assert_eq!( collection.providers.len(), 1);

    assert_eq!( collection.extent.spatial.bbox, vec![ SPATIAL_EXTENT.to_vec() ]);
    let [start,end] = collection.extent.temporal.interval[0];
    assert_eq!( start, Some( Utc.with_ymd_and_hms( 2001, 1, 1, 0, 0, 0).unwrap()));
    assert_eq!( end, Some( Utc.with_ymd_and_hms( 2020, 12, 31, 23, 59, 59).unwrap()));

    let thumbnail = &collection.assets[THUMBNAIL_KEY];
    assert!( thumbnail.has_role("thumbnail"));
    assert_eq!( thumbnail.media_type.as_deref(), Some("image/png"));

    assert!( collection.item_assets.contains_key( LANDCOVER_KEY));
    assert!( collection.item_assets.contains_key( METADATA_KEY));
    assert_eq!( json["item_assets"][LANDCOVER_KEY]["proj:epsg"], NLCD_EPSG);
    assert!( json["item_assets"][LANDCOVER_KEY].get("file:size").is_none());

    collection.validate().unwrap();
}

#[test]
fn test_collection_legend() {
    let collection = create_collection();

    let landcover = &collection.item_assets[LANDCOVER_KEY];
    assert_eq!( landcover.file.as_ref().unwrap().values, file_values());

    let summaries = collection.summaries.as_ref().unwrap();
    assert_eq!( summaries.epsg, vec![ NLCD_EPSG ]);
    assert_eq!( summaries.label_classes, label_classes());
    assert_eq!( summaries.label_classes[0].classes.len(), CLASSIFICATION_VALUES.len());
}

#[test]
fn test_collection_roundtrip() {
    let mut collection = create_collection();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    collection.save( &path).unwrap();

    let loaded = Collection::from_file( &path).unwrap();
    assert_eq!( loaded, collection);
    assert!( loaded.links.iter().any( |l| l.rel == "self"));
    loaded.validate().unwrap();
}
