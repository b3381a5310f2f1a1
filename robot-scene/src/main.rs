use robot_scene::{SceneConfig, create_app};

fn main() {
    let mut app = create_app(SceneConfig::authored());

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
