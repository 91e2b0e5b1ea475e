use std::io::Read;

use super::Compressor;
use crate::error::{Error, Result};

pub(super) fn decompress(compressor: Compressor, data: &[u8]) -> Result<Vec<u8>> {
    match compressor {
        #[cfg(feature = "gzip")]
        Compressor::Gzip => read_all(compressor, flate2::read::MultiGzDecoder::new(data)),
        #[cfg(feature = "xz")]
        Compressor::Xz => {
            // auto detection covers both .xz and the legacy .lzma container
            let stream =
                xz2::stream::Stream::new_auto_decoder(u64::MAX, xz2::stream::CONCATENATED)
                    .map_err(|e| Error::decompression(compressor, e))?;
            read_all(compressor, xz2::read::XzDecoder::new_stream(data, stream))
        }
        #[cfg(feature = "zstd")]
        Compressor::Zstd => {
            zstd::stream::decode_all(data).map_err(|e| Error::decompression(compressor, e))
        }
        #[cfg(feature = "bzip2")]
        Compressor::Bzip2 => read_all(compressor, bzip2::read::MultiBzDecoder::new(data)),
        other => Err(Error::DecompressorUnavailable {
            compressor: other,
            program: other.program().unwrap_or_default(),
        }),
    }
}

#[allow(dead_code)]
fn read_all<R: Read>(compressor: Compressor, mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| Error::decompression(compressor, e))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[cfg(feature = "gzip")]
    #[test]
    fn test_gzip() {
        use flate2::Compression;
        use flate2::write::GzEncoder;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"hello").unwrap();
        let data = encoder.finish().unwrap();

        assert_eq!(decompress(Compressor::Gzip, &data).unwrap(), b"hello");
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn test_gzip_garbage() {
        let err = decompress(Compressor::Gzip, b"not gzip at all").unwrap_err();
        assert!(matches!(
            err,
            Error::Decompression {
                compressor: Compressor::Gzip,
                ..
            }
        ));
    }

    #[cfg(feature = "xz")]
    #[test]
    fn test_xz_and_lzma_containers() {
        use xz2::stream::{LzmaOptions, Stream};
        use xz2::write::XzEncoder;

        let mut encoder = XzEncoder::new(Vec::new(), 6);
        encoder.write_all(b"xz payload").unwrap();
        let data = encoder.finish().unwrap();
        assert_eq!(decompress(Compressor::Xz, &data).unwrap(), b"xz payload");

        let options = LzmaOptions::new_preset(6).unwrap();
        let stream = Stream::new_lzma_encoder(&options).unwrap();
        let mut encoder = XzEncoder::new_stream(Vec::new(), stream);
        encoder.write_all(b"lzma payload").unwrap();
        let data = encoder.finish().unwrap();
        assert_eq!(decompress(Compressor::Xz, &data).unwrap(), b"lzma payload");
    }

    #[cfg(feature = "xz")]
    #[test]
    fn test_xz_concatenated_streams() {
        use xz2::write::XzEncoder;

        let mut data = Vec::new();
        for part in [&b"first-"[..], &b"second"[..]] {
            let mut encoder = XzEncoder::new(Vec::new(), 6);
            encoder.write_all(part).unwrap();
            data.extend(encoder.finish().unwrap());
        }

        assert_eq!(decompress(Compressor::Xz, &data).unwrap(), b"first-second");
    }

    #[test]
    fn test_identity_has_no_codec() {
        assert!(matches!(
            decompress(Compressor::Identity, b"raw"),
            Err(Error::DecompressorUnavailable {
                compressor: Compressor::Identity,
                ..
            })
        ));
    }

    #[cfg(feature = "zstd")]
    #[test]
    fn test_zstd() {
        let data = zstd::stream::encode_all(&b"zstd payload"[..], 3).unwrap();
        assert_eq!(decompress(Compressor::Zstd, &data).unwrap(), b"zstd payload");
        assert!(decompress(Compressor::Zstd, b"garbage").is_err());
    }

    #[cfg(feature = "bzip2")]
    #[test]
    fn test_bzip2() {
        use bzip2::Compression;
        use bzip2::write::BzEncoder;

        let mut encoder = BzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(b"bzip2 payload").unwrap();
        let data = encoder.finish().unwrap();

        assert_eq!(decompress(Compressor::Bzip2, &data).unwrap(), b"bzip2 payload");
    }
}
