use crate::components::entity::Entity;
use crate::renderer::instance::{DrawBuffer, DrawInstance};

/// Fill the draw buffer from the scene, in registry order.
/// Hidden entities and entities with an empty box are skipped.
pub fn build_draw_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut DrawBuffer) {
    buffer.clear();

    for entity in entities {
        let body = &entity.body;
        if !body.visible || body.size.x <= 0.0 || body.size.y <= 0.0 {
            continue;
        }

        let mut instance = DrawInstance {
            x: body.pos.x,
            y: body.pos.y,
            w: body.size.x,
            h: body.size.y,
            ..Default::default()
        };
        if let Some(sheet) = body.sheet.sheet {
            instance.sheet = sheet.0;
            instance.flags |= DrawInstance::HAS_SHEET;
        }
        if let Some(src) = entity.source_rect() {
            instance.src_x = src.x;
            instance.src_y = src.y;
            instance.src_w = src.w;
            instance.src_h = src.h;
            instance.flags |= DrawInstance::HAS_SOURCE;
        }
        buffer.push(instance);
    }
}
