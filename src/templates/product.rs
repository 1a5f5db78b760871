//! Product card with a toggleable add-to-cart button

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Product Card";
pub const DESCRIPTION: &str = "Interactive product display with cart functionality";

/// Stars shown filled out of five
const RATING: usize = 4;

const STYLE: &str = r"
#addToCart {
    transition: all 0.3s ease;
}
#addToCart:active {
    transform: scale(0.95);
}
";

const BEHAVIOR: &str = r#"
const addToCartBtn = document.getElementById('addToCart');
let isInCart = false;

addToCartBtn.addEventListener('click', () => {
    isInCart = !isInCart;
    addToCartBtn.innerHTML = isInCart
        ? '<i class="fas fa-check mr-2"></i>Added to Cart'
        : 'Add to Cart';
    addToCartBtn.classList.toggle('bg-green-500');
    addToCartBtn.classList.toggle('bg-blue-500');

    addToCartBtn.classList.add('scale-110');
    setTimeout(() => addToCartBtn.classList.remove('scale-110'), 200);
});
"#;

/// Build the product card bundle
pub fn generate() -> Result<RenderBundle> {
    let stars: String = (0..5)
        .map(|i| {
            let color = if i < RATING { "text-yellow-400" } else { "text-gray-300" };
            format!(r#"<i class="fas fa-star {color}"></i>"#)
        })
        .collect();

    let markup = format!(
        r#"
<div class="max-w-sm mx-auto bg-white rounded-xl shadow-lg overflow-hidden">
    <div class="relative">
        <img src="https://picsum.photos/400/300" class="w-full h-48 object-cover" alt="Product">
        <div class="absolute top-2 right-2 bg-red-500 text-white px-2 py-1 rounded-full text-sm">Sale!</div>
    </div>
    <div class="p-4">
        <h3 class="text-xl font-semibold mb-2">Premium Product</h3>
        <p class="text-gray-600 mb-4">High-quality premium product with amazing features.</p>
        <div class="flex items-center mb-4">
            <span class="text-2xl font-bold">$99.99</span>
            <span class="ml-2 text-sm text-gray-500 line-through">$149.99</span>
        </div>
        <div class="flex items-center mb-4">
            {stars}
            <span class="ml-2 text-sm text-gray-600">({RATING}.0)</span>
        </div>
        <button id="addToCart" class="w-full bg-blue-500 text-white py-2 rounded-lg hover:bg-blue-600 transition-colors">
            Add to Cart
        </button>
    </div>
</div>
"#
    );

    Ok(RenderBundle::new(markup, STYLE, BEHAVIOR))
}
