pub mod raster_decoder_image;
