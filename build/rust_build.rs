/**
 * Generates rust types for the numbering-plan schema in /resources
 */

use std::path::Path;

use thiserror::Error;

const RESOURCES_DIR: &str = "resources";
const METADATA_SCHEMA: &str = "resources/phonemetadata.proto";
const BUNDLED_METADATA: &str = "resources/PhoneNumberMetadata.pb";

#[derive(Debug, Error)]
enum BuildError {
    #[error("Required resource '{path}' is missing")]
    MissingResource { path: &'static str },
}

fn require_resource(path: &'static str) -> Result<(), BuildError> {
    if !Path::new(path).is_file() {
        return Err(BuildError::MissingResource { path });
    }
    println!("cargo:rerun-if-changed={}", path);
    Ok(())
}

fn main() -> Result<(), BuildError> {
    require_resource(METADATA_SCHEMA)?;
    // compiled in with include_bytes!, so only watched here
    require_resource(BUNDLED_METADATA)?;

    protobuf_codegen::Codegen::new()
        .pure()
        .includes([RESOURCES_DIR])
        .input(METADATA_SCHEMA)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
