// Integration tests for SeamCarver, against the public API only.

use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{GridView, SeamCarver, SeamError, SeamFinder, BORDER_ENERGY};

// A cheap, repeatable scramble of colors, so the tests don't depend on
// anything but the pixel coordinates.
fn noisy(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let h = (x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503)).wrapping_mul(97);
        Rgb([(h >> 8) as u8, (h >> 16) as u8, (h >> 24) as u8])
    })
}

fn transposed(image: &RgbImage) -> RgbImage {
    ImageBuffer::from_fn(image.height(), image.width(), |x, y| *image.get_pixel(y, x))
}

fn assert_connected(seam: &[u32], length: u32, range: u32) {
    assert_eq!(seam.len(), length as usize);
    assert!(seam.iter().all(|&v| v < range), "{:?} leaves 0..{}", seam, range);
    assert!(
        seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1),
        "{:?} is not connected",
        seam
    );
}

#[test]
fn border_pixels_have_border_energy() {
    let carver = SeamCarver::new(&noisy(7, 5)).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            let e = carver.energy(x, y).unwrap();
            if x == 0 || y == 0 || x == 6 || y == 4 {
                assert_eq!(e, BORDER_ENERGY);
            } else {
                assert!(e >= 0.0);
            }
        }
    }
    assert_eq!(
        carver.energy(7, 0),
        Err(SeamError::OutOfRange {
            x: 7,
            y: 0,
            width: 7,
            height: 5
        })
    );
}

#[test]
fn removing_a_vertical_seam_drops_one_pixel_per_row() {
    let original = noisy(8, 6);
    let mut carver = SeamCarver::new(&original).unwrap();
    let seam = carver.find_vertical_seam();
    assert_connected(&seam, 6, 8);

    carver.remove_vertical_seam(&seam).unwrap();
    assert_eq!((carver.width(), carver.height()), (7, 6));

    let carved = carver.current_image();
    for y in 0..6 {
        let mut expected: Vec<Rgb<u8>> = (0..8).map(|x| *original.get_pixel(x, y)).collect();
        expected.remove(seam[y as usize] as usize);
        let found: Vec<Rgb<u8>> = (0..7).map(|x| *carved.get_pixel(x, y)).collect();
        assert_eq!(found, expected, "row {}", y);
    }
}

#[test]
fn removing_a_horizontal_seam_drops_one_pixel_per_column() {
    let original = noisy(5, 7);
    let mut carver = SeamCarver::new(&original).unwrap();
    let seam = carver.find_horizontal_seam();
    assert_connected(&seam, 5, 7);

    carver.remove_horizontal_seam(&seam).unwrap();
    assert_eq!((carver.width(), carver.height()), (5, 6));

    let carved = carver.into_image();
    for x in 0..5 {
        let mut expected: Vec<Rgb<u8>> = (0..7).map(|y| *original.get_pixel(x, y)).collect();
        expected.remove(seam[x as usize] as usize);
        let found: Vec<Rgb<u8>> = (0..6).map(|y| *carved.get_pixel(x, y)).collect();
        assert_eq!(found, expected, "column {}", x);
    }
}

#[test]
fn found_seams_can_always_be_removed() {
    let mut carver = SeamCarver::new(&noisy(9, 7)).unwrap();
    while carver.width() > 1 || carver.height() > 1 {
        if carver.width() > 1 {
            let seam = carver.find_vertical_seam();
            assert_connected(&seam, carver.height(), carver.width());
            carver.remove_vertical_seam(&seam).unwrap();
        }
        if carver.height() > 1 {
            let seam = carver.find_horizontal_seam();
            assert_connected(&seam, carver.width(), carver.height());
            carver.remove_horizontal_seam(&seam).unwrap();
        }
    }
    assert_eq!(carver.find_vertical_seam(), vec![0]);
    assert_eq!(
        carver.remove_vertical_seam(&[0]),
        Err(SeamError::Exhausted("column"))
    );
}

#[test]
fn one_pixel_wide_images_have_a_single_seam() {
    let carver = SeamCarver::new(&noisy(1, 6)).unwrap();
    assert_eq!(carver.find_vertical_seam(), vec![0; 6]);
}

#[test]
fn horizontal_seams_are_vertical_seams_of_the_transpose() {
    let image = noisy(6, 9);
    let carver = SeamCarver::new(&image).unwrap();
    let turned = SeamCarver::new(&transposed(&image)).unwrap();
    assert_eq!(carver.horizontal_seam_path(), turned.vertical_seam_path());
    assert_eq!(carver.find_horizontal_seam(), carver.find_horizontal_seam());
}

#[test]
fn seams_route_around_edges() {
    // Left half black, right half white: the only interior energy lies
    // along the columns either side of the boundary.
    let image = ImageBuffer::from_fn(6, 5, |x, _| {
        if x < 3 {
            Rgb([0u8, 0, 0])
        } else {
            Rgb([255u8, 255, 255])
        }
    });
    let carver = SeamCarver::new(&image).unwrap();
    let path = carver.vertical_seam_path();
    assert_eq!(path.seam, vec![0, 1, 1, 1, 0]);
    assert_eq!(path.cost, 2.0 * BORDER_ENERGY);
}

#[test]
fn invalid_seams_are_rejected_before_carving() {
    let image = noisy(5, 4);
    let mut carver = SeamCarver::new(&image).unwrap();
    assert!(carver.remove_vertical_seam(&[0, 1, 2]).is_err());
    assert!(carver.remove_vertical_seam(&[0, 2, 2, 2]).is_err());
    assert!(carver.remove_vertical_seam(&[4, 4, 4, 5]).is_err());
    assert!(carver.remove_horizontal_seam(&[0, 1, 2, 3, 4]).is_err());
    assert_eq!(carver.grid().dimensions(), (5, 4));
    assert_eq!(carver.current_image(), image);
}
