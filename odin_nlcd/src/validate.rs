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

//! structural validation of STAC Items and Collections.
//! This is not a JSON schema validator. It checks the fields that are required by STAC core and
//! that every extension field (`<prefix>:<name>`) is backed by a declared `stac_extensions` schema

use serde_json::{Map, Value};

use crate::errors::{Result, validation_error};

/// something that can check a serialized STAC object
pub trait StacValidator {
    fn validate (&self, obj: &Value) -> Result<()>;
}

pub struct StructuralValidator;

impl StacValidator for StructuralValidator {
    fn validate (&self, obj: &Value) -> Result<()> {
        let obj = obj.as_object().ok_or( validation_error("not a JSON object"))?;

        required_str( obj, "stac_version")?;
        let id = required_str( obj, "id")?;
        if id.is_empty() { return Err( validation_error("empty id")) }
        required_array( obj, "links")?;

        let extensions: Vec<&str> = match obj.get("stac_extensions") {
            Some(Value::Array(exts)) => exts.iter().filter_map( |e| e.as_str()).collect(),
            Some(_) => return Err( validation_error("stac_extensions is not an array")),
            None => Vec::new()
        };

        match required_str( obj, "type")? {
            "Feature" => validate_item( obj, &extensions),
            "Collection" => validate_collection( obj, &extensions),
            other => Err( validation_error( format!("unsupported STAC object type {other}")))
        }
    }
}

fn validate_item (obj: &Map<String,Value>, extensions: &[&str]) -> Result<()> {
    let geometry = obj.get("geometry").ok_or( validation_error("missing geometry"))?;
    if !geometry.is_null() {
        geometry.get("type").and_then( |t| t.as_str()).ok_or( validation_error("geometry without type"))?;
        geometry.get("coordinates").ok_or( validation_error("geometry without coordinates"))?;
        check_bbox( obj.get("bbox").ok_or( validation_error("missing bbox"))?)?;
    }

    let props = required_object( obj, "properties")?;
    let datetime = props.get("datetime").ok_or( validation_error("missing properties.datetime"))?;
    if datetime.is_null() && (props.get("start_datetime").is_none() || props.get("end_datetime").is_none()) {
        return Err( validation_error("null datetime requires start_datetime and end_datetime"))
    }
    check_extension_fields( props, extensions, "properties")?;

    let assets = required_object( obj, "assets")?;
    for (key,asset) in assets {
        let asset = asset.as_object().ok_or( validation_error( format!("asset {key} is not an object")))?;
        required_str( asset, "href")?;
        check_extension_fields( asset, extensions, key)?;
    }

    Ok(())
}

fn validate_collection (obj: &Map<String,Value>, extensions: &[&str]) -> Result<()> {
    required_str( obj, "description")?;
    required_str( obj, "license")?;

    let extent = required_object( obj, "extent")?;
    let spatial = required_object( extent, "spatial")?;
    let bboxes = required_array( spatial, "bbox")?;
    if bboxes.is_empty() { return Err( validation_error("empty spatial extent")) }
    for bbox in bboxes { check_bbox( bbox)? }

    let temporal = required_object( extent, "temporal")?;
    for interval in required_array( temporal, "interval")? {
        match interval.as_array() {
            Some(a) if a.len() == 2 => {}
            _ => return Err( validation_error("temporal interval is not a [start,end] pair"))
        }
    }

    if let Some(Value::Object(assets)) = obj.get("assets") {
        for (key,asset) in assets {
            let asset = asset.as_object().ok_or( validation_error( format!("asset {key} is not an object")))?;
            required_str( asset, "href")?;
            check_extension_fields( asset, extensions, key)?;
        }
    }

    if let Some(item_assets) = obj.get("item_assets") {
        if !has_extension( extensions, "item-assets") {
            return Err( validation_error("item_assets without item-assets extension"))
        }
        let item_assets = item_assets.as_object().ok_or( validation_error("item_assets is not an object"))?;
        for (key,def) in item_assets {
            let def = def.as_object().ok_or( validation_error( format!("item asset {key} is not an object")))?;
            check_extension_fields( def, extensions, key)?;
        }
    }

    if let Some(summaries) = obj.get("summaries") {
        let summaries = summaries.as_object().ok_or( validation_error("summaries is not an object"))?;
        check_extension_fields( summaries, extensions, "summaries")?;
    }

    Ok(())
}

/// every `prefix:name` key has to be covered by an extension schema URL that contains `/<extension-name>/`
fn check_extension_fields (obj: &Map<String,Value>, extensions: &[&str], context: &str) -> Result<()> {
    for key in obj.keys() {
        if let Some((prefix,_)) = key.split_once(':') {
            let ext_name = match prefix {
                "proj" => "projection",
                other => other
            };
            if !has_extension( extensions, ext_name) {
                return Err( validation_error( format!("{context}: field {key} without declared {ext_name} extension")))
            }
        }
    }
    Ok(())
}

fn has_extension (extensions: &[&str], ext_name: &str) -> bool {
    let pattern = format!("/{ext_name}/");
    extensions.iter().any( |e| e.contains( pattern.as_str()))
}

fn check_bbox (bbox: &Value) -> Result<()> {
    match bbox.as_array() {
        Some(a) if (a.len() == 4 || a.len() == 6) && a.iter().all( |v| v.is_number()) => Ok(()),
        _ => Err( validation_error( format!("invalid bbox {bbox}")))
    }
}

fn required_str<'a> (obj: &'a Map<String,Value>, key: &str) -> Result<&'a str> {
    obj.get(key).and_then( |v| v.as_str()).ok_or( validation_error( format!("missing string field {key}")))
}

fn required_array<'a> (obj: &'a Map<String,Value>, key: &str) -> Result<&'a Vec<Value>> {
    obj.get(key).and_then( |v| v.as_array()).ok_or( validation_error( format!("missing array field {key}")))
}

fn required_object<'a> (obj: &'a Map<String,Value>, key: &str) -> Result<&'a Map<String,Value>> {
    obj.get(key).and_then( |v| v.as_object()).ok_or( validation_error( format!("missing object field {key}")))
}
