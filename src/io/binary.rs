//! Bit-exact binary model reader/writer (`spec.md` §6).

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::rc::Rc;

use crate::catalog::AttributeCatalog;
use crate::error::{Result, RipperError};
use crate::model::Model;

/// Write `model` to `path`, writing to a sibling temp file first and
/// renaming it into place. A crash mid-write then never leaves a
/// truncated model at `path` — `spec.md` §7 explicitly invites this as an
/// improvement over the reference implementation's direct write.
pub fn write(model: &Model, path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut w = BufWriter::new(file);
        model.encode_binary(&mut w)?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read a model previously written by [`write`]. `catalog` must describe
/// the same attribute types used at training time; the CLI rebuilds it
/// from whatever dataset accompanies the `evaluate`/`classify` invocation.
pub fn read(path: &Path, catalog: &Rc<AttributeCatalog>) -> Result<Model> {
    let mut file = File::open(path).map_err(|_| RipperError::MissingModel(path.to_path_buf()))?;
    Model::decode_binary(&mut file, catalog)
}
