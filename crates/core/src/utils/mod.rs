pub mod color_utils;
