pub mod patch_pass;

pub use patch_pass::PatchPass;
