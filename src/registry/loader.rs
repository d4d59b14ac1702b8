use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Deserializes any `Deserialize` asset type from a RON file.
#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extensions: Vec<&'static str>,
    _phantom: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _phantom: PhantomData,
        }
    }
}

/// Parse a RON document into `T`; shared by the loader and tests.
pub fn parse_ron<T>(bytes: &[u8]) -> Result<T, RonLoaderError>
where
    T: for<'de> Deserialize<'de>,
{
    Ok(ron::de::from_bytes::<T>(bytes)?)
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_ron(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}
