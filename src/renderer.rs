//! Instanced sprite renderer.
//!
//! Every sprite sheet becomes one GL texture. A frame is drawn as an
//! instanced unit quad stretched over its screen rectangle, sampling the
//! frame's sub-rectangle of the sheet. Draws are batched per sheet.

use crate::camera::Camera;
use crate::sprites::{SpriteFrame, SpriteLibrary};
use crate::world::World;
use glam::Vec2;
use glow::*;
use std::mem;
use std::sync::Arc;

const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec4 aInstanceRect;
layout (location = 2) in vec4 aInstanceUv;

uniform mat4 uProjection;

out vec2 vUv;

void main() {
    vec2 screenPos = aInstanceRect.xy + aPos * aInstanceRect.zw;
    gl_Position = uProjection * vec4(screenPos, 0.0, 1.0);
    vUv = mix(aInstanceUv.xy, aInstanceUv.zw, aPos);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
in vec2 vUv;
out vec4 FragColor;

uniform sampler2D uSheet;

void main() {
    FragColor = texture(uSheet, vUv);
}
"#;

/// Floats per instance: screen rect (x, y, w, h) + uv rect (u0, v0, u1, v1)
const INSTANCE_FLOATS: usize = 8;

/// One sprite to draw this frame, anchored at its center
#[derive(Debug, Clone, Copy)]
pub struct SpriteDraw {
    pub frame: SpriteFrame,
    pub world_pos: Vec2,
}

struct SheetTexture {
    texture: NativeTexture,
    width: u32,
    height: u32,
}

pub struct Renderer {
    gl: Arc<glow::Context>,
    program: NativeProgram,
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    instance_vbo: NativeBuffer,
    projection_loc: NativeUniformLocation,
    sheet_loc: Option<NativeUniformLocation>,
    sheets: Vec<SheetTexture>,
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, String> {
        unsafe {
            let program = link_program(&gl, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;

            let projection_loc = gl
                .get_uniform_location(program, "uProjection")
                .ok_or("Failed to get projection uniform location")?;
            let sheet_loc = gl.get_uniform_location(program, "uSheet");

            // Unit quad, y down like the screen
            let vertices: [f32; 12] = [
                0.0, 0.0, // top-left
                1.0, 0.0, // top-right
                1.0, 1.0, // bottom-right
                0.0, 0.0, // top-left
                1.0, 1.0, // bottom-right
                0.0, 1.0, // bottom-left
            ];

            let vao = gl
                .create_vertex_array()
                .map_err(|e| format!("Failed to create VAO: {}", e))?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl
                .create_buffer()
                .map_err(|e| format!("Failed to create VBO: {}", e))?;
            gl.bind_buffer(ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&vertices), STATIC_DRAW);

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);

            let instance_vbo = gl
                .create_buffer()
                .map_err(|e| format!("Failed to create instance VBO: {}", e))?;
            gl.bind_buffer(ARRAY_BUFFER, Some(instance_vbo));

            let stride = (INSTANCE_FLOATS * mem::size_of::<f32>()) as i32;
            // Screen rect (4 floats)
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 4, FLOAT, false, stride, 0);
            gl.vertex_attrib_divisor(1, 1);

            // UV rect (4 floats)
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 4, FLOAT, false, stride, 16);
            gl.vertex_attrib_divisor(2, 1);

            gl.bind_vertex_array(None);

            gl.enable(BLEND);
            // Sheets are uploaded with premultiplied alpha
            gl.blend_func(ONE, ONE_MINUS_SRC_ALPHA);

            Ok(Self {
                gl,
                program,
                vao,
                vbo,
                instance_vbo,
                projection_loc,
                sheet_loc,
                sheets: Vec::new(),
            })
        }
    }

    /// Upload every sheet in `library` not yet on the GPU
    pub fn upload_sheets(&mut self, library: &SpriteLibrary) -> Result<(), String> {
        for sheet in &library.sheets()[self.sheets.len()..] {
            let mut img = sheet.image.clone();

            // Convert to premultiplied alpha
            for pixel in img.pixels_mut() {
                let a = pixel[3] as f32 / 255.0;
                pixel[0] = (pixel[0] as f32 * a) as u8;
                pixel[1] = (pixel[1] as f32 * a) as u8;
                pixel[2] = (pixel[2] as f32 * a) as u8;
            }

            let (width, height) = img.dimensions();
            let texture = unsafe {
                let tex = self
                    .gl
                    .create_texture()
                    .map_err(|e| format!("Failed to create texture for {}: {}", sheet.path.display(), e))?;
                self.gl.bind_texture(TEXTURE_2D, Some(tex));

                // Nearest keeps pixel art crisp when zoomed
                self.gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST as i32);
                self.gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST as i32);
                self.gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE as i32);
                self.gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE as i32);

                self.gl.tex_image_2d(
                    TEXTURE_2D,
                    0,
                    RGBA as i32,
                    width as i32,
                    height as i32,
                    0,
                    RGBA,
                    UNSIGNED_BYTE,
                    Some(img.as_raw()),
                );

                self.gl.bind_texture(TEXTURE_2D, None);
                tex
            };

            log::debug!("uploaded {} ({}x{})", sheet.path.display(), width, height);
            self.sheets.push(SheetTexture { texture, width, height });
        }
        Ok(())
    }

    pub fn resize(&self, width: i32, height: i32) {
        unsafe {
            self.gl.viewport(0, 0, width, height);
        }
    }

    pub fn clear(&self, color: [f32; 3]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], 1.0);
            self.gl.clear(COLOR_BUFFER_BIT);
        }
    }

    /// Draw sprites in order, one instanced call per run of the same sheet
    pub fn render_sprites(&self, camera: &Camera, sprites: &[SpriteDraw]) {
        puffin::profile_function!();
        if sprites.is_empty() {
            return;
        }

        unsafe {
            self.gl.use_program(Some(self.program));
            self.gl.bind_vertex_array(Some(self.vao));

            let projection = camera.screen_projection().to_cols_array();
            self.gl
                .uniform_matrix_4_f32_slice(Some(&self.projection_loc), false, &projection);
            self.gl.uniform_1_i32(self.sheet_loc.as_ref(), 0);
            self.gl.active_texture(TEXTURE0);
            self.gl.bind_buffer(ARRAY_BUFFER, Some(self.instance_vbo));

            for batch in sprites.chunk_by(|a, b| a.frame.sheet == b.frame.sheet) {
                let sheet_id = batch[0].frame.sheet;
                let Some(sheet) = self.sheets.get(sheet_id) else {
                    log::debug!("sheet {} not uploaded, skipping {} sprites", sheet_id, batch.len());
                    continue;
                };

                let mut instance_data = Vec::with_capacity(batch.len() * INSTANCE_FLOATS);
                for sprite in batch {
                    instance_data.extend_from_slice(&instance(camera, (sheet.width, sheet.height), sprite));
                }

                self.gl.bind_texture(TEXTURE_2D, Some(sheet.texture));
                self.gl
                    .buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&instance_data), DYNAMIC_DRAW);
                self.gl.draw_arrays_instanced(TRIANGLES, 0, 6, batch.len() as i32);
            }

            self.gl.bind_texture(TEXTURE_2D, None);
            self.gl.bind_vertex_array(None);
        }
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Sprites of the world in draw order: enemies, then the player on top
pub fn collect_sprites(world: &World) -> Vec<SpriteDraw> {
    puffin::profile_function!();
    let camera = &world.camera;
    let mut sprites: Vec<SpriteDraw> = world
        .live_enemies()
        .filter_map(|enemy| {
            enemy.current_frame().map(|&frame| SpriteDraw {
                frame,
                world_pos: enemy.position,
            })
        })
        .filter(|sprite| on_screen(camera, sprite))
        .collect();

    // The camera follows the player, so it is never culled
    match world.player.current_frame() {
        Some(&frame) => sprites.push(SpriteDraw {
            frame,
            world_pos: world.player.position,
        }),
        None => log::debug!(
            "no frame for player {:?} facing {:?}",
            world.player.state,
            world.player.facing
        ),
    }
    sprites
}

/// Whether any part of the sprite falls inside the viewport
fn on_screen(camera: &Camera, sprite: &SpriteDraw) -> bool {
    let half = Vec2::new(sprite.frame.width as f32, sprite.frame.height as f32) / 2.0;
    let view_min = camera.screen_to_world(Vec2::ZERO);
    let view_max = camera.screen_to_world(Vec2::new(camera.viewport_width, camera.viewport_height));
    let min = sprite.world_pos - half;
    let max = sprite.world_pos + half;
    min.x < view_max.x && max.x > view_min.x && min.y < view_max.y && max.y > view_min.y
}

/// Screen rect and UV rect for one sprite centered on its world position
fn instance(camera: &Camera, (sheet_w, sheet_h): (u32, u32), sprite: &SpriteDraw) -> [f32; INSTANCE_FLOATS] {
    let frame = &sprite.frame;
    let size = Vec2::new(frame.width as f32, frame.height as f32) * camera.zoom;
    let top_left = camera.world_to_screen(sprite.world_pos) - size / 2.0;

    let sheet_w = sheet_w as f32;
    let sheet_h = sheet_h as f32;
    [
        top_left.x,
        top_left.y,
        size.x,
        size.y,
        frame.x as f32 / sheet_w,
        frame.y as f32 / sheet_h,
        (frame.x + frame.width) as f32 / sheet_w,
        (frame.y + frame.height) as f32 / sheet_h,
    ]
}

unsafe fn link_program(gl: &glow::Context, vertex_src: &str, fragment_src: &str) -> Result<NativeProgram, String> {
    let vertex_shader = gl
        .create_shader(VERTEX_SHADER)
        .map_err(|e| format!("Failed to create vertex shader: {}", e))?;
    gl.shader_source(vertex_shader, vertex_src);
    gl.compile_shader(vertex_shader);
    if !gl.get_shader_compile_status(vertex_shader) {
        return Err(gl.get_shader_info_log(vertex_shader));
    }

    let fragment_shader = gl
        .create_shader(FRAGMENT_SHADER)
        .map_err(|e| format!("Failed to create fragment shader: {}", e))?;
    gl.shader_source(fragment_shader, fragment_src);
    gl.compile_shader(fragment_shader);
    if !gl.get_shader_compile_status(fragment_shader) {
        return Err(gl.get_shader_info_log(fragment_shader));
    }

    let program = gl
        .create_program()
        .map_err(|e| format!("Failed to create program: {}", e))?;
    gl.attach_shader(program, vertex_shader);
    gl.attach_shader(program, fragment_shader);
    gl.link_program(program);
    if !gl.get_program_link_status(program) {
        return Err(gl.get_program_info_log(program));
    }

    gl.delete_shader(vertex_shader);
    gl.delete_shader(fragment_shader);
    Ok(program)
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            for sheet in &self.sheets {
                self.gl.delete_texture(sheet.texture);
            }
            self.gl.delete_program(self.program);
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.instance_vbo);
        }
    }
}

fn as_u8_slice<T>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, mem::size_of_val(data)) }
}
