#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = pnm_ppm::PPMDecoder::new(data);

    if let Ok(pixels) = decoder.decode() {
        let (width, height) = decoder.get_dimensions().unwrap();
        assert_eq!(pixels.len(), width * height * 3);
    }
});
