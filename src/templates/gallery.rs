//! Image grid with a keyboard-navigable lightbox

use std::fmt::Write as _;

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Image Gallery";
pub const DESCRIPTION: &str = "Responsive image grid with lightbox";

pub const IMAGE_COUNT: usize = 6;

const LIGHTBOX: &str = r#"
<div id="lightbox" class="fixed inset-0 bg-black bg-opacity-90 hidden items-center justify-center z-50">
    <button id="closeLightbox" class="absolute top-4 right-4 text-white text-2xl"><i class="fas fa-times"></i></button>
    <button id="prevImage" class="absolute left-4 text-white text-2xl"><i class="fas fa-chevron-left"></i></button>
    <button id="nextImage" class="absolute right-4 text-white text-2xl"><i class="fas fa-chevron-right"></i></button>
    <img id="lightboxImage" class="max-h-[80vh] max-w-[80vw] object-contain" src="" alt="Lightbox Image">
</div>
"#;

const STYLE: &str = r"
#lightbox {
    transition: all 0.3s ease;
}
#lightboxImage {
    transition: all 0.3s ease;
}
";

// The keydown listener is registered on document and survives a remount.
const BEHAVIOR: &str = r"
const images = document.querySelectorAll('.group img');
const lightbox = document.getElementById('lightbox');
const lightboxImage = document.getElementById('lightboxImage');
let currentImageIndex = 0;

function openLightbox(index) {
    currentImageIndex = index;
    updateLightboxImage();
    lightbox.classList.remove('hidden');
    lightbox.classList.add('flex');
}

function hideLightbox() {
    lightbox.classList.add('hidden');
    lightbox.classList.remove('flex');
}

function step(offset) {
    currentImageIndex = (currentImageIndex + offset + images.length) % images.length;
    updateLightboxImage();
}

function updateLightboxImage() {
    lightboxImage.src = images[currentImageIndex].src;
    lightboxImage.classList.add('scale-95');
    setTimeout(() => lightboxImage.classList.remove('scale-95'), 50);
}

images.forEach((img, index) => img.addEventListener('click', () => openLightbox(index)));
document.getElementById('closeLightbox').addEventListener('click', hideLightbox);
document.getElementById('prevImage').addEventListener('click', () => step(-1));
document.getElementById('nextImage').addEventListener('click', () => step(1));

document.addEventListener('keydown', (e) => {
    if (lightbox.classList.contains('hidden')) return;
    if (e.key === 'Escape') hideLightbox();
    else if (e.key === 'ArrowLeft') step(-1);
    else if (e.key === 'ArrowRight') step(1);
});
";

/// Build the gallery bundle
pub fn generate() -> Result<RenderBundle> {
    let mut tiles = String::new();
    for i in 0..IMAGE_COUNT {
        let _ = write!(
            tiles,
            r#"
    <div class="relative group cursor-pointer">
        <img src="https://picsum.photos/400/300?random={i}" class="w-full h-48 object-cover rounded-lg" alt="Gallery Image {n}">
        <div class="absolute inset-0 bg-black bg-opacity-0 group-hover:bg-opacity-50 transition-all duration-300 rounded-lg flex items-center justify-center">
            <i class="fas fa-search text-white opacity-0 group-hover:opacity-100 transform scale-0 group-hover:scale-100 transition-all duration-300"></i>
        </div>
    </div>"#,
            n = i + 1
        );
    }

    let markup = format!(
        "\n<div class=\"grid grid-cols-2 md:grid-cols-3 gap-4\">{tiles}\n</div>{LIGHTBOX}"
    );

    Ok(RenderBundle::new(markup, STYLE, BEHAVIOR))
}
