// Copyright 2025 the xenguide authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The documentation hub contents. Entry bodies are markdown and are
//! rendered to HTML by the `markdown` module.

use crate::types::doc::DocEntry;
use crate::types::doc::DocSection;

pub fn doc_sections() -> &'static [DocSection] {
    &DOC_SECTIONS
}

const DOC_SECTIONS: [DocSection; 6] = [
    DocSection {
        id: "concepts",
        title: "Core Concepts",
        emoji: "🎯",
        entries: &[
            DocEntry {
                title: "Virtualization Fundamentals",
                description: "Basic concepts and terminology",
                body: r#"**What is Virtualization?**

Virtualization creates a virtual version of computing resources like operating systems, servers, or networks. Originally developed by IBM in the 1960s, it has become essential for modern computing.

**Key Concepts:**

- **Hypervisor/VMM**: Software that creates and manages virtual machines
- **Host**: Physical computer running the hypervisor
- **Guest**: Virtual machine running on the hypervisor
- **Domain**: Xen terminology for virtual machines

**Types of Virtualization:**

1. **Full Virtualization**: Complete hardware simulation, unmodified guest OS
2. **Paravirtualization**: Modified guest OS for optimal performance
3. **Hardware-Assisted**: CPU extensions (VT-x/AMD-V) enable efficient virtualization
4. **OS-Level**: Containers sharing a single kernel"#,
            },
            DocEntry {
                title: "Hypervisor Types",
                description: "Type-1 vs Type-2 hypervisors",
                body: r#"**Type-1 Hypervisors (Bare Metal):**

- Run directly on physical hardware
- Examples: Xen, VMware ESXi, Microsoft Hyper-V
- Better performance and security
- Xen Project is the only open-source Type-1 hypervisor

**Type-2 Hypervisors (Hosted):**

- Run on top of existing operating system
- Examples: VMware Workstation, VirtualBox, Parallels
- Easier to install and manage
- Good for development and testing

**Xen Architecture:**

- Microkernel design (~1MB codebase)
- Domain 0: Privileged management domain
- Domain U: Unprivileged guest domains
- Split driver model for device access"#,
            },
        ],
    },
    DocSection {
        id: "architecture",
        title: "Xen Architecture",
        emoji: "🏗️",
        entries: &[
            DocEntry {
                title: "Domain 0 (dom0)",
                description: "The privileged management domain",
                body: r#"**Domain 0 Overview:**

Domain 0 is the first and most privileged domain started by Xen. It serves as the control plane for the entire system.

**Responsibilities:**

1. **Hardware Management**: Contains all hardware drivers
2. **Administrative Interface**: Manages other domains (create, destroy, migrate)
3. **Device Backends**: Provides backend drivers for guest domains
4. **Network Services**: Bridges, routing, firewalling

**Security Considerations:**

- Root exploit in dom0 can compromise entire system
- Best practice: minimize services running in dom0
- Future direction: split responsibilities into dedicated domains

**Commands:**

- `xl info` - Display Xen and dom0 information
- `xl list` - List all domains
- `xl create vm.cfg` - Create new domain"#,
            },
            DocEntry {
                title: "Domain U (domU)",
                description: "Unprivileged guest domains",
                body: r#"**Domain U Overview:**

Unprivileged domains that run user workloads. They cannot directly access hardware and must communicate through dom0.

**Types of domU:**

1. **Paravirtualized (PV)**: Modified guest OS for optimal performance
2. **Hardware-Assisted (HVM)**: Unmodified guest OS using CPU extensions
3. **Hybrid (PV-on-HVM)**: HVM with PV drivers for best performance

**Communication Mechanisms:**

- **Shared Memory**: Primary data transfer method
- **Event Channels**: Asynchronous notifications
- **Grant Tables**: Secure memory sharing
- **XenStore**: Device discovery and configuration

**Resource Management:**

- CPU scheduling via Xen hypervisor scheduler
- Memory allocation with ballooning support
- I/O through split device drivers"#,
            },
        ],
    },
    DocSection {
        id: "commands",
        title: "Command Reference",
        emoji: "💻",
        entries: &[
            DocEntry {
                title: "xl Commands (Primary Tool)",
                description: "Essential xl commands for domain management",
                body: r#"**Domain Management:**

- `xl list` - Show all domains and their status
- `xl create vm.cfg` - Create and start a new domain
- `xl shutdown domain` - Gracefully shutdown a domain
- `xl destroy domain` - Forcefully terminate a domain
- `xl reboot domain` - Restart a domain
- `xl pause domain` - Pause domain execution
- `xl unpause domain` - Resume paused domain

**System Information:**

- `xl info` - Display Xen hypervisor and host information
- `xl dmesg` - Show Xen hypervisor messages
- `xl uptime` - Show domain uptime information
- `xl top` - Real-time domain performance monitor

**Virtual CPU Management:**

- `xl vcpu-list` - List vCPUs for all domains
- `xl vcpu-set domain vcpus` - Change number of vCPUs
- `xl vcpu-pin domain vcpu pcpu` - Pin vCPU to physical CPU

**Memory Management:**

- `xl mem-set domain memory` - Set domain memory
- `xl mem-max domain memory` - Set maximum memory

**Scheduler Control:**

- `xl sched-credit -d domain -w weight` - Set CPU weight
- `xl sched-credit -d domain -c cap` - Set CPU cap

**Migration and Snapshots:**

- `xl save domain filename` - Save domain state to file
- `xl restore filename` - Restore domain from file
- `xl migrate domain host` - Live migrate domain to another host

**Console Access:**

- `xl console domain` - Attach to domain console"#,
            },
            DocEntry {
                title: "Configuration File Syntax",
                description: "Xen domain configuration file reference",
                body: r#"**Basic Configuration Structure:**

```
# Domain name and type
name = "vm-name"
type = "hvm"  # or "pv" for paravirtualized

# Resource allocation
memory = 4096  # Memory in MB
vcpus = 2      # Number of virtual CPUs
maxvcpus = 4   # Maximum vCPUs (for hotplug)

# Boot configuration
builder = "hvm"  # or specify kernel for PV
boot = "cd"      # Boot order: c=HDD, d=CD, n=Network

# Storage configuration
disk = [
    'phy:/dev/vg0/vm-disk,hda,w',      # Physical device
    'file:/path/to/disk.img,hdb,w',    # File-backed disk
    'file:/path/to/cd.iso,hdc:cdrom,r' # CD-ROM
]

# Network configuration
vif = [
    'bridge=xenbr0,mac=00:16:3e:xx:xx:xx'  # Bridged network
]

# Display and input
vnc = 1
vnclisten = "0.0.0.0"
keymap = "en-us"

# Advanced options
acpi = 1
apic = 1
pae = 1
hap = 1                  # Hardware-assisted paging
nestedhvm = 1            # Enable nested virtualization
viridian = 1             # Windows optimizations

# Behavior on events
on_poweroff = "destroy"
on_reboot = "restart"
on_crash = "restart"

# PCI passthrough
pci = ['00:02.0', '00:03.0']
```"#,
            },
        ],
    },
    DocSection {
        id: "troubleshooting",
        title: "Troubleshooting",
        emoji: "🔧",
        entries: &[
            DocEntry {
                title: "Common Installation Issues",
                description: "Solutions for frequent installation problems",
                body: r#"**GRUB Boot Issues:**

Problem: Xen option not appearing in GRUB menu. Solutions:

- Update GRUB: `sudo update-grub`
- Check Xen installation: `dpkg -l | grep xen`
- Verify GRUB configuration: `cat /boot/grub/grub.cfg | grep xen`

**Domain 0 Boot Failures:**

Problem: System fails to boot into Xen. Solutions:

- Check BIOS virtualization settings
- Verify hardware compatibility: `grep -E '(vmx|svm)' /proc/cpuinfo`
- Review Xen command line parameters

**Memory Allocation Errors:**

Problem: "Not enough memory" when creating domains. Solutions:

- Check available memory: `xl info | grep free_memory`
- Adjust dom0 memory: add `dom0_mem=8G,max:8G` to the Xen command line
- Enable memory ballooning: `xl mem-set domain new_memory`

**Network Bridge Problems:**

Problem: Domain network connectivity issues. Solutions:

- Verify bridge exists: `brctl show`
- Check bridge configuration: `ip addr show xenbr0`
- Restart network: `sudo systemctl restart networking`

**GPU Passthrough Issues:**

Problem: GPU not accessible in guest domain. Solutions:

- Verify IOMMU enabled: `dmesg | grep -i iommu`
- Check VFIO binding: `lspci -k`
- Update guest drivers after passthrough"#,
            },
            DocEntry {
                title: "HP Pavilion Specific Issues",
                description: "Hardware-specific troubleshooting for your laptop",
                body: r#"**Intel i5-8300H Issues:**

Problem: CPU not fully utilized by Xen guests. Solutions:

- Enable all CPU features in BIOS
- Set CPU governor to performance: `cpufreq-set -g performance`
- Check CPU pinning: `xl vcpu-list`

**32GB RAM Issues:**

Problem: Not all RAM recognized or available. Solutions:

- Check memory detection: `free -h`
- Verify BIOS memory settings
- Test memory: `memtest86+`

**NVIDIA GTX 1050 Ti Issues:**

Problem: GPU passthrough not working. Solutions:

- Update BIOS to latest version
- Enable VT-d in BIOS advanced settings
- Blacklist NVIDIA driver on host: `modprobe.blacklist=nvidia`
- Verify IOMMU groups: `find /sys/kernel/iommu_groups/ -type l`

**Thermal Issues:**

Problem: Laptop overheating with multiple VMs. Solutions:

- Monitor temperatures: `sensors`
- Limit concurrent high-performance VMs
- Ensure proper laptop ventilation

**Power Management:**

Problem: Poor battery life with Xen. Solutions:

- Configure CPU frequency scaling
- Suspend inactive domains: `xl pause domain`
- Optimize scheduler weights for power efficiency"#,
            },
        ],
    },
    DocSection {
        id: "advanced",
        title: "Advanced Topics",
        emoji: "🚀",
        entries: &[
            DocEntry {
                title: "Live Migration",
                description: "Moving running VMs between hosts",
                body: r#"**Live Migration Overview:**

Live migration allows moving a running domain from one Xen host to another with minimal downtime.

**Requirements:**

- Shared storage (NFS, iSCSI, or Ceph)
- Compatible CPU types on both hosts
- Same Xen version and configuration
- Network connectivity between hosts

**Migration Process:**

```
# On destination host
xl migrate-receive --ready domain

# On source host
xl migrate domain destination-host
```

**Verification:**

```
xl list
ping guest-ip
xl top
```

**Best Practices:**

- Test migration with non-critical VMs first
- Monitor network bandwidth during migration
- Use a dedicated migration network for large VMs
- Have a rollback plan ready"#,
            },
            DocEntry {
                title: "Performance Optimization",
                description: "Advanced performance tuning techniques",
                body: r#"**CPU Optimization:**

```
# Set CPU scheduler weights
xl sched-credit -d domain -w 512

# Pin VCPUs to specific physical CPUs
xl vcpu-pin domain 0 0
xl vcpu-pin domain 1 1

# Enable CPU performance governor
echo performance > /sys/devices/system/cpu/cpu*/cpufreq/scaling_governor
```

**Memory Optimization:**

```
# Configure huge pages (2MB pages)
echo 1024 > /sys/kernel/mm/hugepages/hugepages-2048kB/nr_hugepages

# Prevent memory ballooning in dom0
echo 'GRUB_CMDLINE_XEN_DEFAULT="dom0_mem=8G,max:8G"' >> /etc/default/grub
```

**I/O Optimization:**

```
# Set I/O scheduler for SSDs
echo mq-deadline > /sys/block/sda/queue/scheduler

# Optimize network buffers
echo 'net.core.rmem_max = 134217728' >> /etc/sysctl.conf
echo 'net.core.wmem_max = 134217728' >> /etc/sysctl.conf
```

**GPU Passthrough:**

```
# Configure VFIO for GPU passthrough
echo 'vfio-pci' >> /etc/modules
echo 'options vfio-pci ids=nvidia-gpu-id' >> /etc/modprobe.d/vfio.conf

# Blacklist host GPU driver
echo 'blacklist nvidia' >> /etc/modprobe.d/blacklist-nvidia.conf
update-initramfs -u
```"#,
            },
        ],
    },
    DocSection {
        id: "reference",
        title: "Quick Reference",
        emoji: "📚",
        entries: &[
            DocEntry {
                title: "Configuration Templates",
                description: "Ready-to-use VM configurations",
                body: r#"**Basic HVM Domain (Windows/Linux):**

```
name = "windows-vm"
type = "hvm"
memory = 8192
vcpus = 4
builder = "hvm"
boot = "cd"
disk = ['phy:/dev/vg0/windows-disk,hda,w']
vif = ['bridge=xenbr0']
vnc = 1
```

**Paravirtualized Linux Domain:**

```
name = "linux-pv"
type = "pv"
memory = 4096
vcpus = 2
kernel = "/boot/vmlinuz-xen"
ramdisk = "/boot/initrd.img-xen"
root = "/dev/xvda1"
disk = ['phy:/dev/vg0/linux-disk,xvda,w']
vif = ['bridge=xenbr0']
```

**GPU Passthrough Gaming VM:**

```
name = "gaming-vm"
type = "hvm"
memory = 16384
vcpus = 6
builder = "hvm"
boot = "cd"
disk = ['phy:/dev/vg0/gaming-disk,hda,w']
vif = ['bridge=xenbr0']
pci = ['01:00.0', '01:00.1']  # GPU + Audio
gfx_passthru = 1
vnc = 0
```"#,
            },
            DocEntry {
                title: "Network Configuration Examples",
                description: "Common network setups",
                body: r#"**Bridge Configuration (/etc/netplan/):**

```
network:
  version: 2
  ethernets:
    ens33:
      dhcp4: false
  bridges:
    xenbr0:
      dhcp4: true
      interfaces:
        - ens33
```

**NAT Configuration:**

```
# Enable IP forwarding
echo 'net.ipv4.ip_forward=1' >> /etc/sysctl.conf

# Configure iptables for NAT
iptables -t nat -A POSTROUTING -o eth0 -j MASQUERADE
iptables -A FORWARD -i xenbr0 -j ACCEPT
```

**Network Monitoring:**

```
# Monitor bridge status
brctl show

# Check interface statistics
ip -s link show

# Monitor network traffic
tcpdump -i xenbr0

# Network performance testing
iperf3 -s            # Server mode
iperf3 -c server-ip  # Client mode
```"#,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_entries() {
        for section in doc_sections() {
            assert!(!section.entries.is_empty());
        }
    }

    #[test]
    fn test_search_by_title() {
        let hits: Vec<_> = doc_sections()
            .iter()
            .flat_map(|section| section.entries)
            .filter(|entry| entry.matches("migration"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Live Migration");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entry = &doc_sections()[0].entries[0];
        assert!(entry.matches("VIRTUALIZATION"));
        assert!(entry.matches("virtualization"));
    }
}
