use wasm_bindgen_test::*;

use crate::components::loading::Loading;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn loading_placeholder_renders() {
    let rendered = yew::LocalServerRenderer::<Loading>::new().render().await;
    assert!(rendered.contains("Lojinha"));
    assert!(rendered.contains("Carregando"));
}
