//! eoDR file naming convention, e.g.
//! `SMOS--------_20190101T000000_20190102T000000_1.vrt`.

use crate::error::Result;
use crate::naming::{Codec, Convention, DerivedProperty, FieldSpec};

pub const NAME: &str = "eodr";

pub fn convention() -> Result<Convention> {
    let datetime = Codec::datetime("%Y%m%dT%H%M%S");

    Convention::builder(NAME)
        .field(FieldSpec::fixed("id", 12).optional())
        .field(FieldSpec::fixed("dt_1", 15).codec(datetime.clone()).optional())
        .field(FieldSpec::fixed("dt_2", 15).codec(datetime).optional())
        .field(FieldSpec::variable("band").optional())
        // Mean of start and end, or the start alone.
        .derived(DerivedProperty::midpoint("dt", "dt_1", "dt_2"))
        .extension(".vrt")
        .build()
}
