//! Seed expansion and uniform sampling.
//!
//! A seed is expanded into a [`KeyStream`] (HKDF over SHA3-256) and every random decision the
//! generator makes is drawn from that stream through [`sampler`], in a fixed order.

pub(crate) mod sampler;
pub(crate) mod stream;
