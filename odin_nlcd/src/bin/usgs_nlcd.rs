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

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use odin_nlcd::{
    create_collection, create_item, create_cog, create_retiled_cogs, load_config_path, prefix_modifier,
    CogOptions, GdalInspector, NlcdConfig
};

#[derive(Parser, Debug)]
#[command(version, about = "usgs_nlcd - create STAC metadata and COGs for USGS NLCD land cover data")]
struct Args {
    /// optional RON config file for external tool paths (defaults are used otherwise)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: NlcdCommand,
}

#[derive(Subcommand, Debug)]
enum NlcdCommand {
    /// create the NLCD STAC collection
    CreateCollection {
        /// pathname of the collection JSON to write
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// create a STAC item for a NLCD land cover COG
    CreateItem {
        /// href of the COG (its file name has to follow the NLCD naming scheme)
        #[arg(short, long)]
        source: String,

        /// pathname of the item JSON to write
        #[arg(short, long)]
        destination: PathBuf,

        /// prefix to add to the source href for reading (e.g. "/vsicurl/")
        #[arg(short, long)]
        read_prefix: Option<String>,
    },

    /// convert a NLCD GeoTIFF into COG(s)
    CreateCog {
        /// the GeoTIFF to convert
        #[arg(short, long)]
        input: PathBuf,

        /// the COG to create, or the output directory if --tile is set
        #[arg(short, long)]
        output: PathBuf,

        /// split input into tiles and create a COG for each tile that has data
        #[arg(long)]
        tile: bool,

        /// only log what would be done
        #[arg(long)]
        dry_run: bool,

        /// log failures of external tools instead of returning an error
        #[arg(long)]
        no_raise: bool,
    },
}

fn main () -> Result<()> {
    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config_path( path)?,
        None => NlcdConfig::default()
    };

    match args.command {
        NlcdCommand::CreateCollection { destination } => {
            let mut collection = create_collection();
            collection.validate()?;
            collection.save( &destination)?;
        }

        NlcdCommand::CreateItem { source, destination, read_prefix } => {
            let modifier = read_prefix.as_deref().map( prefix_modifier);
            let mut item = create_item( &source, modifier.as_deref(), &GdalInspector)?;
            item.validate()?;
            item.save( &destination)?;
        }

        NlcdCommand::CreateCog { input, output, tile, dry_run, no_raise } => {
            let opts = CogOptions { raise_on_fail: !no_raise, dry_run };
            if tile {
                let cogs = create_retiled_cogs( &input, &output, opts, &config)?;
                info!("created {} COGs in {:?}", cogs.len(), output);
            } else {
                let cog = create_cog( &input, &output, opts, &config)?;
                info!("created COG {:?}", cog);
            }
        }
    }

    Ok(())
}
