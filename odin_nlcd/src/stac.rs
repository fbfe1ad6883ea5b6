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

//! creation of STAC Items for NLCD land cover COGs and of the (static) NLCD Collection

use geo::Rect;
use serde_json::json;
use tracing::{debug,warn};

use crate::constants::*;
use crate::errors::{OdinNlcdError, Result};
use crate::filename::NlcdFileName;
use crate::inspect::{RasterInspector, ReadHrefModifier, read_href};
use crate::model::*;

pub const LANDCOVER_KEY: &str = "landcover";
pub const METADATA_KEY: &str = "metadata";
pub const THUMBNAIL_KEY: &str = "thumbnail";

const LANDCOVER_ROLES: &[&str] = &["data", "labels", "labels-raster"];
const LANDCOVER_TITLE: &str = "Land Cover";
const LANDCOVER_DESCRIPTION: &str = "NLCD land cover classification COG";
const METADATA_ROLES: &[&str] = &["metadata"];
const METADATA_TITLE: &str = "FGDC Metadata";

/* #region legend based fields **************************************************************************************/

/// the legend as `file:values` (one mapping object per pixel value)
pub fn file_values () -> Vec<MappingObject> {
    CLASSIFICATION_VALUES.iter()
        .map( |(value,label)| MappingObject { values: vec![json!(value)], summary: label.to_string() })
        .collect()
}

/// the legend class names as the (single, unnamed) label class set
pub fn label_classes () -> Vec<LabelClasses> {
    let classes = CLASSIFICATION_VALUES.iter().map( |(_,label)| json!(label)).collect();
    vec![ LabelClasses { name: None, classes } ]
}

pub fn label_fields () -> LabelFields {
    LabelFields {
        label_type: "raster".to_string(),
        tasks: vec!["classification".to_string()],
        properties: None,
        description: String::new(),
        classes: label_classes(),
    }
}

pub fn raster_fields () -> RasterFields {
    RasterFields {
        bands: vec![
            RasterBand {
                nodata: Some( NODATA as f64),
                sampling: Some( Sampling::Area),
                data_type: Some( DataType::Uint8),
                spatial_resolution: Some( SPATIAL_RES),
            }
        ]
    }
}

/* #endregion legend based fields */

/* #region Item *****************************************************************************************************/

/// create the STAC Item for the NLCD land cover COG at `cog_href`.
/// Year, publication date and tile indices are taken from the file name, raster attributes are read through
/// `inspector` from the (optionally `read_href_modifier` rewritten) href
pub fn create_item<I: RasterInspector> (cog_href: &str, read_href_modifier: Option<ReadHrefModifier>, inspector: &I) -> Result<Item> {
    let fname = NlcdFileName::parse( cog_href)?;
    if !is_release_year( fname.year) {
        return Err( OdinNlcdError::UnknownYear( fname.year))
    }
    let start = start_of_year( fname.year).ok_or( OdinNlcdError::UnknownYear( fname.year))?;
    let end = validity_end( fname.year).ok_or( OdinNlcdError::UnknownYear( fname.year))?;

    let access_href = read_href( cog_href, read_href_modifier);
    let raster = inspector.inspect( &access_href)?;
    let file_size = inspector.file_size( &access_href);
    if file_size.is_none() { debug!("no file size for {access_href}") }

    let info = &raster.info;
    let epsg = info.epsg.unwrap_or( NLCD_EPSG);
    if epsg != NLCD_EPSG { warn!("{cog_href} has unexpected EPSG:{epsg}") }

    let proj = ProjectionFields {
        epsg,
        wkt2: info.wkt2.clone(),
        bbox: Some( info.bounds.to_vec()),
        transform: Some( info.affine_transform().to_vec()),
        shape: Some( info.shape().to_vec()),
    };

    let [west,south,east,north] = raster.geo_bounds;
    let footprint = Rect::new( (west,south), (east,north)).to_polygon();
    let geometry = geojson::Geometry::new( geojson::Value::from( &footprint));

    let properties = ItemProperties {
        title: Some( fname.title()),
        description: Some( DESCRIPTION.to_string()),
        datetime: None,
        start_datetime: Some(start),
        end_datetime: Some(end),
        proj: Some( proj.clone()),
        label: Some( label_fields()),
    };

    let mut item = Item::new( fname.item_id(), geometry, raster.geo_bounds.to_vec(), properties);
    item.stac_extensions = [PROJECTION_EXT, LABEL_EXT, FILE_EXT, RASTER_EXT].iter().map( |e| e.to_string()).collect();

    let mut landcover = Asset::new( cog_href, media_type::COG, LANDCOVER_ROLES);
    landcover.title = Some( LANDCOVER_TITLE.to_string());
    landcover.description = Some( LANDCOVER_DESCRIPTION.to_string());
    landcover.proj = Some( proj);
    landcover.file = Some( FileFields { size: file_size, values: file_values() });
    landcover.raster = Some( raster_fields());
    item.assets.insert( LANDCOVER_KEY.to_string(), landcover);

    let mut metadata = Asset::new( fname.metadata_href(), media_type::XML, METADATA_ROLES);
    metadata.title = Some( METADATA_TITLE.to_string());
    item.assets.insert( METADATA_KEY.to_string(), metadata);

    Ok(item)
}

/* #endregion Item */

/* #region Collection ***********************************************************************************************/

/// create the NLCD collection. This only depends on dataset constants
pub fn create_collection () -> Collection {
    let (start,end) = temporal_extent();
    let extent = Extent {
        spatial: SpatialExtent { bbox: vec![ SPATIAL_EXTENT.to_vec() ] },
        temporal: TemporalExtent { interval: vec![ [start,end] ] },
    };

    let mut collection = Collection::new( NLCD_ID, DESCRIPTION, LICENSE, extent);
    collection.title = Some( TITLE.to_string());
    collection.keywords = KEYWORDS.iter().map( |k| k.to_string()).collect();
    collection.stac_extensions = [ITEM_ASSETS_EXT, PROJECTION_EXT, LABEL_EXT, FILE_EXT, RASTER_EXT].iter().map( |e| e.to_string()).collect();

    collection.providers.push( Provider {
        name: PROVIDER_NAME.to_string(),
        roles: PROVIDER_ROLES.iter().map( |r| r.to_string()).collect(),
        url: Some( PROVIDER_URL.to_string()),
    });

    collection.links.push( Link::new( "license", LICENSE_HREF).with_title( LICENSE_TITLE));

    let mut thumbnail = Asset::new( THUMBNAIL_HREF, media_type::PNG, &["thumbnail"]);
    thumbnail.title = Some( "NLCD Land Cover Thumbnail".to_string());
    collection.assets.insert( THUMBNAIL_KEY.to_string(), thumbnail);

    collection.item_assets.insert( LANDCOVER_KEY.to_string(), AssetDefinition {
        media_type: Some( media_type::COG.to_string()),
        title: Some( LANDCOVER_TITLE.to_string()),
        description: Some( LANDCOVER_DESCRIPTION.to_string()),
        roles: LANDCOVER_ROLES.iter().map( |r| r.to_string()).collect(),
        epsg: Some( NLCD_EPSG),
        file: Some( FileFields { size: None, values: file_values() }),
        raster: Some( raster_fields()),
    });

    collection.item_assets.insert( METADATA_KEY.to_string(), AssetDefinition {
        media_type: Some( media_type::XML.to_string()),
        title: Some( METADATA_TITLE.to_string()),
        description: None,
        roles: METADATA_ROLES.iter().map( |r| r.to_string()).collect(),
        epsg: None,
        file: None,
        raster: None,
    });

    let label = label_fields();
    collection.summaries = Some( Summaries {
        epsg: vec![ NLCD_EPSG ],
        label_type: vec![ label.label_type ],
        label_tasks: label.tasks,
        label_classes: label.classes,
    });

    collection
}

/* #endregion Collection */
