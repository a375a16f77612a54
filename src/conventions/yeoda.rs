//! yeoda file naming convention.
//!
//! All fields are variable length and may be empty; the trailing `creator`
//! field is dropped entirely when absent, e.g.
//! `SIG0_20210128T184253__VH__E036N039T3_EU020M_V1M0R1_S1AIWGRDH.tif`.

use crate::error::Result;
use crate::naming::{Codec, Convention, DerivedProperty, FieldSpec};

pub const NAME: &str = "yeoda";

pub fn convention() -> Result<Convention> {
    Convention::builder(NAME)
        .field(FieldSpec::variable("var_name").optional())
        .field(
            FieldSpec::variable("datetime_1")
                .codec(Codec::DateOrDateTime)
                .optional(),
        )
        .field(
            FieldSpec::variable("datetime_2")
                .codec(Codec::DateOrDateTime)
                .optional(),
        )
        .field(FieldSpec::variable("band").optional())
        .field(
            FieldSpec::variable("extra_field")
                .codec(Codec::integer_or_text(3))
                .optional(),
        )
        .field(FieldSpec::variable("tile_name").optional())
        .field(FieldSpec::variable("grid_name").optional())
        .field(FieldSpec::variable("data_version").optional())
        .field(FieldSpec::variable("sensor_field").optional())
        .field(FieldSpec::variable("creator").omit_when_absent())
        .derived(DerivedProperty::midpoint("time", "datetime_1", "datetime_2"))
        .derived(DerivedProperty::concat("ftile", &["grid_name", "tile_name"], "_"))
        .extension(".tif")
        .build()
}
