use crate::events::TouchEvent;
use crate::slider::CairoRangeSlider;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub slider: Rc<RefCell<CairoRangeSlider>>,
    pub range_label: String,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    Touch(TouchEvent),
}

fn describe_range(slider: &CairoRangeSlider) -> String {
    format!(
        "{:.0}° → {:.0}°",
        slider.start_angle(),
        slider.end_angle()
    )
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (CairoRangeSlider, i32, i32);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Ring Range"),
            set_default_size: (width, height),

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,

                    connect_resize[sender] => move |_, w, h| {
                        sender.input(AppMsg::Resize(w, h));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::Touch(TouchEvent::down(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::Touch(TouchEvent::moved(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |gesture, dx, dy| {
                            let (x, y) = gesture.start_point().unwrap_or_default();
                            sender.input(AppMsg::Touch(TouchEvent::up(x + dx, y + dy)));
                        },
                        connect_cancel[sender] => move |_, _| {
                            sender.input(AppMsg::Touch(TouchEvent::cancel()));
                        }
                    }
                },

                gtk::Label {
                    set_margin_top: 8,
                    set_margin_bottom: 8,
                    #[watch]
                    set_label: &model.range_label,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (slider, width, height) = init;

        let model = AppModel {
            range_label: describe_range(&slider),
            slider: Rc::new(RefCell::new(slider)),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let slider_draw = model.slider.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                let mut cr = cr.clone();
                if let Err(e) = slider_draw.borrow_mut().on_draw(&mut cr) {
                    log::error!("Drawing error: {}", e);
                }
            });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(w, h) => {
                self.slider
                    .borrow_mut()
                    .on_size_changed(w as f64, h as f64);
            }
            AppMsg::Touch(event) => {
                let response = self.slider.borrow_mut().on_touch_event(event);
                if !response.should_redraw {
                    return;
                }
            }
        }
        self.range_label = describe_range(&self.slider.borrow());
        self.drawing_area.queue_draw();
    }
}
