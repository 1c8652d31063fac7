pub mod identify_image;
pub mod lookup_barcode;
pub mod parse_data_tag;
