pub(crate) mod hcl;
pub(crate) mod pick;
