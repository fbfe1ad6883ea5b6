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

//! typed STAC (v1.0.0) Item and Collection documents.
//! Extension fields are explicit sub-structures that get flattened into their parent JSON object on
//! serialization, i.e. a `ProjectionFields` inside an `Asset` shows up as `"proj:epsg"`, `"proj:bbox"` etc.

use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::Result;
use crate::validate::{StacValidator, StructuralValidator};

pub const STAC_VERSION: &str = "1.0.0";

pub const PROJECTION_EXT: &str = "https://stac-extensions.github.io/projection/v1.0.0/schema.json";
pub const LABEL_EXT: &str = "https://stac-extensions.github.io/label/v1.0.1/schema.json";
pub const FILE_EXT: &str = "https://stac-extensions.github.io/file/v2.1.0/schema.json";
pub const RASTER_EXT: &str = "https://stac-extensions.github.io/raster/v1.1.0/schema.json";
pub const ITEM_ASSETS_EXT: &str = "https://stac-extensions.github.io/item-assets/v1.0.0/schema.json";

pub mod media_type {
    pub const COG: &str = "image/tiff; application=geotiff; profile=cloud-optimized";
    pub const XML: &str = "application/xml";
    pub const PNG: &str = "image/png";
    pub const JSON: &str = "application/json";
}

/* #region common building blocks ***********************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename="type", skip_serializing_if="Option::is_none", default)]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub title: Option<String>,
}

impl Link {
    pub fn new (rel: impl ToString, href: impl ToString) -> Self {
        Link { rel: rel.to_string(), href: href.to_string(), media_type: None, title: None }
    }

    pub fn with_title (mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_media_type (mut self, media_type: impl ToString) -> Self {
        self.media_type = Some(media_type.to_string());
        self
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Provider {
    pub name: String,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub url: Option<String>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Asset {
    pub href: String,
    #[serde(rename="type", skip_serializing_if="Option::is_none", default)]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(flatten)]
    pub proj: Option<ProjectionFields>,
    #[serde(flatten)]
    pub file: Option<FileFields>,
    #[serde(flatten)]
    pub raster: Option<RasterFields>,
}

impl Asset {
    pub fn new (href: impl ToString, media_type: &str, roles: &[&str]) -> Self {
        Asset {
            href: href.to_string(),
            media_type: Some(media_type.to_string()),
            title: None,
            description: None,
            roles: roles.iter().map( |r| r.to_string()).collect(),
            proj: None,
            file: None,
            raster: None,
        }
    }

    pub fn has_role (&self, role: &str) -> bool {
        self.roles.iter().any( |r| r == role)
    }
}

/// definition of an asset that items of a collection have (item-assets extension)
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct AssetDefinition {
    #[serde(rename="type", skip_serializing_if="Option::is_none", default)]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(rename="proj:epsg", skip_serializing_if="Option::is_none", default)]
    pub epsg: Option<u32>,
    #[serde(flatten)]
    pub file: Option<FileFields>,
    #[serde(flatten)]
    pub raster: Option<RasterFields>,
}

/* #endregion common building blocks */

/* #region extension sub-structures *********************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ProjectionFields {
    #[serde(rename="proj:epsg")]
    pub epsg: u32,
    #[serde(rename="proj:wkt2", skip_serializing_if="Option::is_none", default)]
    pub wkt2: Option<String>,
    #[serde(rename="proj:bbox", skip_serializing_if="Option::is_none", default)]
    pub bbox: Option<Vec<f64>>,
    #[serde(rename="proj:transform", skip_serializing_if="Option::is_none", default)]
    pub transform: Option<Vec<f64>>,
    #[serde(rename="proj:shape", skip_serializing_if="Option::is_none", default)]
    pub shape: Option<Vec<usize>>,
}

/// pixel value -> summary mapping of the file extension
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct MappingObject {
    pub values: Vec<Value>,
    pub summary: String,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct FileFields {
    #[serde(rename="file:size", skip_serializing_if="Option::is_none", default)]
    pub size: Option<u64>,
    #[serde(rename="file:values")]
    pub values: Vec<MappingObject>,
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum Sampling { Area, Point }

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum DataType { Int8, Int16, Int32, Int64, Uint8, Uint16, Uint32, Uint64, Float32, Float64 }

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct RasterBand {
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub nodata: Option<f64>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub sampling: Option<Sampling>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub spatial_resolution: Option<f64>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct RasterFields {
    #[serde(rename="raster:bands")]
    pub bands: Vec<RasterBand>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct LabelClasses {
    pub name: Option<String>,
    pub classes: Vec<Value>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct LabelFields {
    #[serde(rename="label:type")]
    pub label_type: String,
    #[serde(rename="label:tasks")]
    pub tasks: Vec<String>,
    /// null for raster labels
    #[serde(rename="label:properties")]
    pub properties: Option<Vec<String>>,
    #[serde(rename="label:description")]
    pub description: String,
    #[serde(rename="label:classes")]
    pub classes: Vec<LabelClasses>,
}

/* #endregion extension sub-structures */

/* #region Item *****************************************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ItemProperties {
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub description: Option<String>,
    /// null if the item covers a time range
    pub datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub end_datetime: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub proj: Option<ProjectionFields>,
    #[serde(flatten)]
    pub label: Option<LabelFields>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Item {
    #[serde(rename="type")]
    pub object_type: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub id: String,
    pub geometry: geojson::Geometry,
    pub bbox: Vec<f64>,
    pub properties: ItemProperties,
    pub links: Vec<Link>,
    pub assets: BTreeMap<String,Asset>,
}

impl Item {
    pub fn new (id: impl ToString, geometry: geojson::Geometry, bbox: Vec<f64>, properties: ItemProperties) -> Self {
        Item {
            object_type: "Feature".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.to_string(),
            geometry,
            bbox,
            properties,
            links: Vec::new(),
            assets: BTreeMap::new(),
        }
    }

    pub fn set_self_href (&mut self, path: &Path) -> Result<()> {
        set_self_link( &mut self.links, path, media_type::JSON)
    }

    pub fn to_value (&self) -> Result<Value> {
        Ok( serde_json::to_value(self)?)
    }

    pub fn validate (&self) -> Result<()> {
        StructuralValidator.validate( &self.to_value()?)
    }

    /// set self link to the absolute `path` and write the pretty printed item JSON to it
    pub fn save (&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        self.set_self_href( path)?;
        write_json( path, self)?;
        info!("saved item {} to {:?}", self.id, path);
        Ok( path.to_path_buf())
    }

    pub fn from_file (path: impl AsRef<Path>) -> Result<Item> {
        let data = fs::read( path.as_ref())?;
        Ok( serde_json::from_slice( &data)?)
    }
}

/* #endregion Item */

/* #region Collection ***********************************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct SpatialExtent {
    pub bbox: Vec<Vec<f64>>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct TemporalExtent {
    pub interval: Vec<[Option<DateTime<Utc>>;2]>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Summaries {
    #[serde(rename="proj:epsg")]
    pub epsg: Vec<u32>,
    #[serde(rename="label:type")]
    pub label_type: Vec<String>,
    #[serde(rename="label:tasks")]
    pub label_tasks: Vec<String>,
    #[serde(rename="label:classes")]
    pub label_classes: Vec<LabelClasses>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Collection {
    #[serde(rename="type")]
    pub object_type: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub id: String,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub title: Option<String>,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub license: String,
    #[serde(default)]
    pub providers: Vec<Provider>,
    pub extent: Extent,
    pub links: Vec<Link>,
    #[serde(default)]
    pub assets: BTreeMap<String,Asset>,
    #[serde(default)]
    pub item_assets: BTreeMap<String,AssetDefinition>,
    #[serde(skip_serializing_if="Option::is_none", default)]
    pub summaries: Option<Summaries>,
}

impl Collection {
    pub fn new (id: impl ToString, description: impl ToString, license: impl ToString, extent: Extent) -> Self {
        Collection {
            object_type: "Collection".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.to_string(),
            title: None,
            description: description.to_string(),
            keywords: Vec::new(),
            license: license.to_string(),
            providers: Vec::new(),
            extent,
            links: Vec::new(),
            assets: BTreeMap::new(),
            item_assets: BTreeMap::new(),
            summaries: None,
        }
    }

    pub fn set_self_href (&mut self, path: &Path) -> Result<()> {
        set_self_link( &mut self.links, path, media_type::JSON)
    }

    pub fn to_value (&self) -> Result<Value> {
        Ok( serde_json::to_value(self)?)
    }

    pub fn validate (&self) -> Result<()> {
        StructuralValidator.validate( &self.to_value()?)
    }

    pub fn save (&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        self.set_self_href( path)?;
        write_json( path, self)?;
        info!("saved collection {} to {:?}", self.id, path);
        Ok( path.to_path_buf())
    }

    pub fn from_file (path: impl AsRef<Path>) -> Result<Collection> {
        let data = fs::read( path.as_ref())?;
        Ok( serde_json::from_slice( &data)?)
    }
}

/* #endregion Collection */

fn set_self_link (links: &mut Vec<Link>, path: &Path, media_type: &str) -> Result<()> {
    let abs_path = std::path::absolute( path)?;
    links.retain( |l| l.rel != "self");
    links.push( Link::new( "self", abs_path.to_string_lossy()).with_media_type( media_type));
    Ok(())
}

fn write_json<T: Serialize> (path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { fs::create_dir_all( dir)? }
    }
    let json = serde_json::to_string_pretty( value)?;
    fs::write( path, json)?;
    Ok(())
}
