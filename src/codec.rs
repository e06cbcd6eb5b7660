mod codec_error;
mod xml_decoder;
mod xml_encoder;
mod xml_rpc_codec;
mod xml_tree;

pub use codec_error::CodecError;
pub use xml_decoder::XmlDecoder;
pub use xml_encoder::XmlEncoder;
pub use xml_rpc_codec::XmlRpcCodec;
