//! Retrieves information about the version of the program from Git and the
//! build environment so that it can be printed at startup.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
