mod builder;
mod image_ref;
